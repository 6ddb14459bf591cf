use thiserror::Error;

/// Errors from verdict classification.
#[derive(Debug, Error)]
pub enum VerdictError {
    /// No candidate scores were provided; a verdict cannot be fabricated.
    /// The LEGITIMATE fallback applies only to a computed low score, never
    /// to a missing computation.
    #[error("no candidate scores to classify")]
    EmptyScoreSet,
}
