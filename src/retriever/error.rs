use thiserror::Error;

use crate::encoder::EncodingError;
use crate::index::IndexError;

/// Errors surfaced by candidate retrieval.
///
/// Encoding and index errors pass through unchanged; nothing substitutes a
/// default candidate list on failure.
#[derive(Debug, Error)]
pub enum RetrieverError {
    /// The suspicious domain could not be encoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// The index rejected the query.
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// The index/corpus artifacts are missing or inconsistent.
    #[error("index unavailable: {reason}")]
    IndexUnavailable { reason: String },
}
