//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Teller Configuration
# Only override what you want to change -- missing fields use defaults.

[model]
# base_url = "https://api.mistral.ai/v1"
# model = "mistral-large-latest"
# api_key_env = "MISTRAL_API_KEY"   # read from the environment or a .env file
# temperature = 0.7                 # 0.0-1.5, unset uses the API default
# max_tokens = 1024                 # 1-32768, unset uses the API default
# connect_timeout_secs = 10         # 1-600
# request_timeout_secs = 120        # 1-600

[persona]
# system_directive = """
# You are a helpful banking assistant bot.
# """

[web]
# bind = "127.0.0.1"
# port = 8501
# session_ttl_secs = 3600           # 60-86400
# max_input_len = 4096              # 1-65536

[logging]
# level = "info"                    # trace, debug, info, warn, error
"##
    .to_string()
}
