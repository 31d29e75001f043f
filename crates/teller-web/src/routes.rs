//! HTTP routes for the browser chat UI.
//!
//! Every tab owns a UUID kept in its `sessionStorage`; all conversation
//! routes are scoped under `/api/session/:id`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use teller_ai::{AiClient, Message, Session, SessionConfig};
use uuid::Uuid;

use crate::store::{SessionStore, SharedSession};

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub client: Arc<dyn AiClient>,
    pub session_config: SessionConfig,
    pub max_input_len: usize,
}

impl AppState {
    async fn session(&self, id: Uuid) -> SharedSession {
        self.store
            .get_or_create(id, || {
                Session::new(self.client.clone(), self.session_config.clone())
            })
            .await
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/api/session/:id/history", get(history))
        .route("/api/session/:id/messages", post(send_message))
        .route("/api/session/:id/reset", post(reset))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub reply: Option<String>,
    pub error: Option<ErrorBody>,
    pub messages: Vec<Message>,
}

/// Request problems rejected before any model call.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("invalid session id: {0}")]
    BadSessionId(String),
    #[error("message is empty")]
    EmptyMessage,
    #[error("message is {len} bytes, limit is {max}")]
    MessageTooLong { len: usize, max: usize },
}

impl RequestError {
    fn kind(&self) -> &'static str {
        match self {
            RequestError::BadSessionId(_) => "bad_session_id",
            RequestError::EmptyMessage => "empty_message",
            RequestError::MessageTooLong { .. } => "message_too_long",
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected request: {self}");
        let body = serde_json::json!({
            "error": ErrorBody {
                kind: self.kind(),
                message: self.to_string(),
            }
        });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

fn parse_session_id(raw: &str) -> Result<Uuid, RequestError> {
    Uuid::parse_str(raw).map_err(|_| RequestError::BadSessionId(raw.to_string()))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HistoryResponse>, RequestError> {
    let id = parse_session_id(&id)?;
    let messages = match state.store.get(id).await {
        Some(session) => session.lock().await.history().to_vec(),
        None => Vec::new(),
    };
    Ok(Json(HistoryResponse { messages }))
}

async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SendRequest>,
) -> Result<Response, RequestError> {
    let id = parse_session_id(&id)?;

    let text = request.text.trim();
    if text.is_empty() {
        return Err(RequestError::EmptyMessage);
    }
    if text.len() > state.max_input_len {
        return Err(RequestError::MessageTooLong {
            len: text.len(),
            max: state.max_input_len,
        });
    }

    let shared = state.session(id).await;
    let mut session = shared.lock().await;

    let response = match session.send(text).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(SendResponse {
                reply: Some(reply),
                error: None,
                messages: session.history().to_vec(),
            }),
        ),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(SendResponse {
                reply: None,
                error: Some(ErrorBody {
                    kind: e.kind(),
                    message: teller_ai::render_reply(&Err(e)),
                }),
                messages: session.history().to_vec(),
            }),
        ),
    };
    drop(session);
    // The call may have outlasted the idle TTL.
    state.store.touch(id).await;

    Ok(response.into_response())
}

async fn reset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HistoryResponse>, RequestError> {
    let id = parse_session_id(&id)?;
    if let Some(session) = state.store.get(id).await {
        session.lock().await.reset();
        tracing::debug!(session_id = %id, "History reset from browser");
    }
    Ok(Json(HistoryResponse {
        messages: Vec::new(),
    }))
}
