//! HTTP gateway (Axum) for the detection pipeline.
//!
//! This module is primarily used by the `lookalike` server binary.

pub mod error;
pub mod handler;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use handler::{AnalyzeRequest, analyze_handler};
pub use state::HandlerState;

use crate::index::SimilarityIndex;

/// Builds the application router over a loaded analyzer.
pub fn create_router_with_state<I>(state: HandlerState<I>) -> Router
where
    I: SimilarityIndex + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/v1/analyze", post(analyze_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub corpus_size: usize,
    pub vocab_size: usize,
    pub top_k: usize,
}

#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<I>(State(state): State<HandlerState<I>>) -> Json<ReadyResponse>
where
    I: SimilarityIndex + 'static,
{
    let retriever = state.analyzer.retriever();

    Json(ReadyResponse {
        status: "ready",
        corpus_size: retriever.corpus().len(),
        vocab_size: retriever.encoder().vocab_size(),
        top_k: state.analyzer.top_k(),
    })
}
