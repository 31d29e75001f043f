//! Listener setup and the serve loop.

use std::sync::Arc;
use std::time::Duration;

use teller_ai::{AiClient, SessionConfig};
use teller_common::TellerError;
use teller_config::TellerConfig;
use tokio::net::TcpListener;

use crate::routes::{router, AppState};
use crate::store::{spawn_reaper, SessionStore};

/// Bind, start the idle-session reaper, and serve until Ctrl-C.
pub async fn serve(config: &TellerConfig, client: Arc<dyn AiClient>) -> teller_common::Result<()> {
    let addr = format!("{}:{}", config.web.bind, config.web.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| TellerError::Server(format!("failed to bind {addr}: {e}")))?;

    let store = SessionStore::new();
    let reaper = spawn_reaper(
        store.clone(),
        Duration::from_secs(config.web.session_ttl_secs),
    );

    let state = AppState {
        store,
        client,
        session_config: SessionConfig::from(&config.persona),
        max_input_len: config.web.max_input_len,
    };

    tracing::info!("teller-web listening on http://{addr}");

    let result = axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    reaper.abort();

    result.map_err(|e| TellerError::Server(e.to_string()))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Ctrl-C received, shutting down"),
        Err(e) => {
            tracing::warn!("Ctrl-C handler unavailable: {e}");
            std::future::pending::<()>().await;
        }
    }
}
