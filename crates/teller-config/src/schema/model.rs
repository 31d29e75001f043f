use serde::{Deserialize, Serialize};

/// Remote chat-completion endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Base URL of the API; `/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Sampling temperature (valid range: 0.0-1.5). Unset uses the API default.
    pub temperature: Option<f64>,
    /// Completion token cap (valid range: 1-32768). Unset uses the API default.
    pub max_tokens: Option<u32>,
    /// Valid range: 1-600.
    pub connect_timeout_secs: u32,
    /// Valid range: 1-600.
    pub request_timeout_secs: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mistral.ai/v1".into(),
            model: "mistral-large-latest".into(),
            api_key_env: "MISTRAL_API_KEY".into(),
            temperature: None,
            max_tokens: None,
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
