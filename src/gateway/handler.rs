use axum::Json;
use axum::extract::State;

use serde::Deserialize;

use crate::index::SimilarityIndex;
use crate::pipeline::Analysis;

use super::error::ApiError;
use super::state::HandlerState;

/// Body of `POST /v1/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Suspicious domain to check against the legitimate corpus.
    pub domain: String,
}

/// Runs the detection pipeline for one domain.
#[tracing::instrument(skip(state, request), fields(domain = %request.domain))]
pub async fn analyze_handler<I>(
    State(state): State<HandlerState<I>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Analysis>, ApiError>
where
    I: SimilarityIndex + 'static,
{
    let analysis = state.analyzer.analyze(&request.domain)?;
    Ok(Json(analysis))
}
