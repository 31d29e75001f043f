//! Mistral chat-completion client.
//!
//! Implements the `AiClient` trait via the OpenAI-compatible
//! `POST {base_url}/chat/completions` endpoint, authenticated with a
//! bearer API key.

mod api;
mod client;
mod config;


pub use client::MistralClient;
pub use config::MistralConfig;
