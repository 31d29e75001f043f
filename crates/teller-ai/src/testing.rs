//! Scripted `AiClient` for exercising sessions and front-ends offline.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{AiClient, AiError, AiResponse, Message, TokenUsage};

/// Replies from a queue of scripted outcomes and records every payload.
///
/// When the queue runs dry it echoes the last user message back.
#[derive(Default)]
pub struct ScriptedClient {
    script: Mutex<VecDeque<Result<String, AiError>>>,
    payloads: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queue a failure.
    pub fn fail(self, error: AiError) -> Self {
        self.push(Err(error));
        self
    }

    pub fn push(&self, outcome: Result<String, AiError>) {
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(outcome);
    }

    /// Every payload received so far, in call order.
    pub fn payloads(&self) -> Vec<Vec<Message>> {
        self.payloads
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.payloads.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    fn model_name(&self) -> &str {
        "scripted"
    }

    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        self.payloads
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(messages.to_vec());

        let next = self
            .script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        let content = match next {
            Some(outcome) => outcome?,
            None => messages
                .last()
                .map(|m| m.content().to_string())
                .unwrap_or_default(),
        };

        Ok(AiResponse {
            usage: TokenUsage {
                input_tokens: messages.len() as u64,
                output_tokens: 1,
            },
            content,
        })
    }
}
