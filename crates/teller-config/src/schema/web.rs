use serde::{Deserialize, Serialize};

/// Browser front-end server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub bind: String,
    pub port: u16,
    /// Idle seconds before a tab's session is dropped (valid range: 60-86400).
    pub session_ttl_secs: u64,
    /// Longest accepted message in bytes (valid range: 1-65536).
    pub max_input_len: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 8501,
            session_ttl_secs: 3600,
            max_input_len: 4096,
        }
    }
}
