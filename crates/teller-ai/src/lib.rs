//! AI engine for Teller.
//!
//! Provides the Mistral chat-completion client and the conversation
//! `Session` that both front-ends drive:
//! - Role-tagged message types
//! - Session management with a fixed system directive
//! - Token usage tracking

pub mod mistral;
pub mod session;
pub mod token_tracker;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

use async_trait::async_trait;

pub use mistral::{MistralClient, MistralConfig};
pub use session::{render_reply, Session, SessionConfig};
pub use token_tracker::TokenTracker;

/// A chat-completion backend.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Model identifier, used to attribute token usage.
    fn model_name(&self) -> &str;

    /// Send the full ordered message list and return the top reply.
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

/// One role-tagged message. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

impl AiError {
    /// Stable tag for the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            AiError::ApiError(_) => "api",
            AiError::Unauthorized(_) => "unauthorized",
            AiError::RateLimited => "rate_limited",
            AiError::NetworkError(_) => "network",
            AiError::ParseError(_) => "parse",
            AiError::Timeout => "timeout",
        }
    }
}
