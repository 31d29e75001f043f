//! Session construction parameters and reply rendering.

use teller_config::schema::PersonaConfig;

use crate::AiError;

/// Explicit inputs for a `Session`. Nothing is read from ambient state.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Instruction text prepended to every request, never stored as a turn.
    pub system_directive: String,
}

impl SessionConfig {
    pub fn new(system_directive: impl Into<String>) -> Self {
        Self {
            system_directive: system_directive.into(),
        }
    }
}

impl From<&PersonaConfig> for SessionConfig {
    fn from(persona: &PersonaConfig) -> Self {
        Self::new(persona.system_directive.clone())
    }
}

/// Render a send result as display text: the reply, or `Error: {details}`.
pub fn render_reply(result: &Result<String, AiError>) -> String {
    match result {
        Ok(text) => text.clone(),
        Err(e) => format!("Error: {e}"),
    }
}
