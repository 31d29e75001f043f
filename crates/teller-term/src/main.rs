mod cli;
mod commands;
mod repl;

use std::process::ExitCode;
use std::sync::Arc;

use teller_ai::{MistralClient, MistralConfig, Session, SessionConfig};
use teller_config::TellerConfig;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

const RULE: &str = "============================================================";

/// `--log-level` wins, then `RUST_LOG`, then the config file.
fn init_logging(args: &cli::Args, config: &TellerConfig) {
    let fallback = config.logging.level.as_directive();
    let filter = match args.log_level.as_deref() {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("Invalid --log-level {directive:?} ({e}), using {fallback}");
            EnvFilter::new(fallback)
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_session(config: &TellerConfig) -> Result<Session, String> {
    let credential =
        teller_config::resolve_credential(&config.model).map_err(|e| e.to_string())?;
    let client = MistralClient::new(MistralConfig::from_model_config(&config.model, &credential))
        .map_err(|e| e.to_string())?;

    Ok(Session::new(
        Arc::new(client),
        SessionConfig::from(&config.persona),
    ))
}

#[tokio::main]
async fn main() -> ExitCode {
    teller_config::load_dotenv();

    let args = cli::parse();

    let mut config = match teller_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = args.apply_overrides(&mut config) {
        eprintln!("✗ Error: {e}");
        return ExitCode::FAILURE;
    }

    init_logging(&args, &config);
    tracing::info!("Teller v{} starting...", env!("CARGO_PKG_VERSION"));

    println!("{RULE}");
    println!("Welcome to the Banking Bot powered by Mistral AI Large");
    println!("{RULE}");
    println!("\nType 'quit' to exit or 'reset' to clear conversation history\n");

    let mut session = match build_session(&config) {
        Ok(session) => session,
        Err(e) => {
            println!("✗ Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("✓ Banking Bot initialized successfully!\n");
    tracing::info!(model = %session.model_name(), "Session ready");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Ctrl-C handler unavailable: {e}");
            std::future::pending::<()>().await;
        }
    };

    let stdin = BufReader::new(tokio::io::stdin());
    if let Err(e) = repl::run(&mut session, stdin, tokio::io::stdout(), shutdown).await {
        tracing::error!("Terminal I/O error: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
