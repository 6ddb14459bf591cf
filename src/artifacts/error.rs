use std::path::PathBuf;

use thiserror::Error;

use crate::encoder::EncodingError;
use crate::index::IndexError;
use crate::retriever::RetrieverError;

/// Errors from loading, writing, or validating the artifact bundle.
#[derive(Debug, Error)]
pub enum ArtifactLoadError {
    /// Artifact file absent and no corpus configured to build from.
    #[error("artifact file not found: {path}")]
    NotFound { path: PathBuf },

    /// Artifact or corpus file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file could not be written.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not valid JSON for the bundle schema.
    #[error("malformed artifact file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Bundle was produced by an incompatible format version.
    #[error("unsupported artifact format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// Persisted encoder state failed validation.
    #[error(transparent)]
    Encoder(#[from] EncodingError),

    /// Persisted vectors failed validation.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// Cross-artifact invariants (corpus/index/encoder agreement) violated.
    #[error(transparent)]
    Inconsistent(#[from] RetrieverError),
}
