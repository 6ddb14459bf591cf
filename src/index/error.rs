use thiserror::Error;

/// Errors from building or searching a similarity index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A vector's dimensionality disagrees with the index.
    #[error("invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A stored vector contains a non-finite component.
    #[error("vector {id} contains a non-finite component")]
    NonFiniteVector { id: usize },
}
