use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::encoder::EncodingError;
use crate::pipeline::AnalyzeError;
use crate::retriever::RetrieverError;

/// HTTP-facing error: a status code and a message body.
///
/// A failed query returns an explicit error, never a default verdict.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<AnalyzeError> for ApiError {
    fn from(error: AnalyzeError) -> Self {
        let status = match &error {
            // Bad input from the caller.
            AnalyzeError::Retrieval(RetrieverError::Encoding(EncodingError::EmptyDomain)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            // Artifacts broken out from under us.
            AnalyzeError::Retrieval(RetrieverError::IndexUnavailable { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
