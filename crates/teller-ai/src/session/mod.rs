//! Conversation session management.
//!
//! A `Session` holds the ordered user/assistant turns, prepends the fixed
//! system directive to every request, and appends a turn pair only when
//! the model call succeeds.

mod chat;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::Session;
pub use types::{render_reply, SessionConfig};
