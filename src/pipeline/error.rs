use thiserror::Error;

use crate::retriever::RetrieverError;
use crate::verdict::VerdictError;

/// Errors from a full analysis pass. Component errors pass through
/// unchanged; a failed query never degrades into a default verdict.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Candidate retrieval failed (encoding or index).
    #[error(transparent)]
    Retrieval(#[from] RetrieverError),

    /// Classification failed (no scores to classify).
    #[error(transparent)]
    Classify(#[from] VerdictError),
}
