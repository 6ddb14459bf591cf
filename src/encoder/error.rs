use thiserror::Error;

/// Errors from fitting or applying the n-gram encoder.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Input domain was empty (or whitespace-only) after case folding.
    #[error("domain is empty after normalization")]
    EmptyDomain,

    /// The corpus passed to `fit` contained no domains.
    #[error("corpus is empty, nothing to fit")]
    EmptyCorpus,

    /// The corpus produced no n-gram features (every domain shorter than the
    /// minimum n-gram length).
    #[error("corpus produced no n-gram features")]
    NoFeatures,

    /// N-gram range is not a valid inclusive range.
    #[error("invalid n-gram range [{min}, {max}]")]
    InvalidNgramRange { min: usize, max: usize },

    /// Restored encoder state is internally inconsistent.
    #[error("encoder state rejected: {reason}")]
    InvalidState { reason: String },
}
