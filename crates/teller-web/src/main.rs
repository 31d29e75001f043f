mod cli;
mod routes;
mod server;
mod store;

use std::process::ExitCode;
use std::sync::Arc;

use teller_ai::{AiClient, MistralClient, MistralConfig};
use teller_config::TellerConfig;
use tracing_subscriber::EnvFilter;

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

fn build_client(config: &TellerConfig) -> teller_common::Result<Arc<dyn AiClient>> {
    let credential = teller_config::resolve_credential(&config.model)?;
    let client = MistralClient::new(MistralConfig::from_model_config(&config.model, &credential))
        .map_err(|e| teller_common::TellerError::Ai(e.to_string()))?;
    Ok(Arc::new(client))
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
    tracing::info!("teller-web v{} starting...", env!("CARGO_PKG_VERSION"));

    // Missing credentials are fatal before anything is bound.
    let client = match build_client(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("✗ Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(model = %client.model_name(), "Model client ready");

    if let Err(e) = server::serve(&config, client).await {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
