//! Session struct and conversation management.

use std::sync::Arc;

use crate::token_tracker::TokenTracker;
use crate::{AiClient, Message, Role};

use super::types::SessionConfig;

/// A conversation: stored turns plus the directive and client they are
/// sent with.
pub struct Session {
    /// Backend every turn is sent to.
    pub(super) client: Arc<dyn AiClient>,
    /// Directive and other fixed inputs.
    pub(super) config: SessionConfig,
    /// Stored user/assistant turns, oldest first. Never holds the directive.
    pub(super) messages: Vec<Message>,
    /// Token usage across the life of the session.
    pub(super) tracker: TokenTracker,
}

impl Session {
    pub fn new(client: Arc<dyn AiClient>, config: SessionConfig) -> Self {
        Self {
            client,
            config,
            messages: Vec::new(),
            tracker: TokenTracker::new(),
        }
    }

    /// The outbound list for sending `user_text` next:
    /// directive, then stored turns in order, then the new user turn.
    pub fn build_payload(&self, user_text: &str) -> Vec<Message> {
        let mut msgs = Vec::with_capacity(self.messages.len() + 2);
        msgs.push(Message::system(self.config.system_directive.as_str()));
        msgs.extend(self.messages.iter().cloned());
        msgs.push(Message::user(user_text));
        msgs
    }

    /// Stored turns, oldest first.
    pub fn history(&self) -> &[Message] {
        &self.messages
    }

    /// Drop all stored turns. Token totals are kept.
    pub fn reset(&mut self) {
        self.messages.clear();
    }

    /// Number of stored turns.
    pub fn turn_count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True when stored turns go user, assistant, user, ... from the start.
    pub fn is_alternating(&self) -> bool {
        self.messages.iter().enumerate().all(|(i, msg)| {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            msg.role() == expected
        })
    }

    pub fn system_directive(&self) -> &str {
        &self.config.system_directive
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}
