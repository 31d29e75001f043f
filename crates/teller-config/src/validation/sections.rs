//! Validation for the model, persona, and web sections.

use crate::schema::TellerConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Validate remote endpoint settings.
pub(crate) fn validate_model(errors: &mut Vec<String>, config: &TellerConfig) {
    let model = &config.model;

    validate_non_empty(errors, "model.model", &model.model);
    validate_non_empty(errors, "model.api_key_env", &model.api_key_env);

    if !(model.base_url.starts_with("http://") || model.base_url.starts_with("https://")) {
        errors.push(format!(
            "model.base_url = {:?} must start with http:// or https://",
            model.base_url
        ));
    }

    if let Some(temperature) = model.temperature {
        validate_range_f64(errors, "model.temperature", temperature, 0.0, 1.5);
    }
    if let Some(max_tokens) = model.max_tokens {
        validate_range(errors, "model.max_tokens", max_tokens.into(), 1, 32768);
    }

    validate_range(
        errors,
        "model.connect_timeout_secs",
        model.connect_timeout_secs.into(),
        1,
        600,
    );
    validate_range(
        errors,
        "model.request_timeout_secs",
        model.request_timeout_secs.into(),
        1,
        600,
    );
}

/// Validate the persona directive.
pub(crate) fn validate_persona(errors: &mut Vec<String>, config: &TellerConfig) {
    validate_non_empty(
        errors,
        "persona.system_directive",
        &config.persona.system_directive,
    );
}

/// Validate browser front-end settings.
pub(crate) fn validate_web(errors: &mut Vec<String>, config: &TellerConfig) {
    let web = &config.web;

    validate_non_empty(errors, "web.bind", &web.bind);
    if web.port == 0 {
        errors.push("web.port must not be 0".into());
    }
    validate_range(errors, "web.session_ttl_secs", web.session_ttl_secs, 60, 86400);
    validate_range(
        errors,
        "web.max_input_len",
        web.max_input_len as u64,
        1,
        65536,
    );
}
