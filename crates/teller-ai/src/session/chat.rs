//! Async send methods for Session.

use tracing::{debug, warn};

use crate::{AiError, Message};

use super::manager::Session;
use super::types::render_reply;

impl Session {
    /// Send `user_text` with the directive and full history, returning the
    /// assistant's reply.
    ///
    /// On success the user turn and the reply are appended, in that order.
    /// On failure nothing is appended, so the failed exchange is discarded
    /// and the next call sends the same history as this one did.
    pub async fn send(&mut self, user_text: &str) -> Result<String, AiError> {
        let payload = self.build_payload(user_text);
        debug!(payload_len = payload.len(), "Sending turn");

        let response = match self.client.send_message(&payload).await {
            Ok(response) => response,
            Err(e) => {
                warn!(kind = e.kind(), "Turn failed: {e}");
                return Err(e);
            }
        };

        self.tracker.record(self.client.model_name(), &response.usage);
        self.messages.push(Message::user(user_text));
        self.messages.push(Message::assistant(response.content.clone()));

        Ok(response.content)
    }

    /// Like [`Session::send`], rendering a failure as `Error: {details}`.
    pub async fn send_or_error_text(&mut self, user_text: &str) -> String {
        render_reply(&self.send(user_text).await)
    }
}
