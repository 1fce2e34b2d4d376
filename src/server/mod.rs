//! HTTP boundary for transcript scoring
//!
//! Exposes a single `POST /score` endpoint plus a health probe. The scoring
//! engine itself never fails; the only error paths here are request
//! validation and body parsing.

use crate::analyzer::ScoringEngine;
use crate::ScoringResult;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

/// Request body for `POST /score`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    /// Transcript text; a missing field is treated as blank and rejected
    #[serde(default)]
    pub transcript: String,
    /// Spoken duration in seconds
    pub duration_sec: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by the scoring endpoint
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transcript missing or blank after trimming
    #[error("Transcript text is required")]
    EmptyTranscript,
    /// Request body was not valid JSON for the expected shape
    #[error("Failed to score transcript")]
    MalformedBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::EmptyTranscript => StatusCode::BAD_REQUEST,
            // Generic failure; no parser detail is leaked to the caller
            ApiError::MalformedBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

async fn score_transcript(
    State(engine): State<Arc<ScoringEngine>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoringResult>, ApiError> {
    let Json(request) = payload?;
    if request.transcript.trim().is_empty() {
        return Err(ApiError::EmptyTranscript);
    }
    Ok(Json(engine.score(&request.transcript, request.duration_sec)))
}

async fn health() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Build the application router. Split from [`serve`] so tests can drive it
/// in-process.
pub fn router() -> Router {
    let engine = Arc::new(ScoringEngine::new());

    Router::new()
        .route("/score", post(score_transcript))
        .route("/health", get(health))
        .with_state(engine)
        .layer(
            CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers(cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until ctrl-c
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "server_listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown_signal_received");
    }
}
