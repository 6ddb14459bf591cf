//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants (e.g. the USI span) from primary ones
//! to avoid drift.
//!
//! # Encoder/Index Invariants
//!
//! The n-gram range is baked into every artifact bundle at build time. A
//! query encoded with a different range than the corpus produces vectors in a
//! different feature space, so the range travels with the bundle and is never
//! read from these defaults at query time.

/// Smallest character n-gram extracted by the encoder.
pub const DEFAULT_NGRAM_MIN: usize = 3;

/// Largest character n-gram extracted by the encoder.
pub const DEFAULT_NGRAM_MAX: usize = 5;

/// Number of nearest legitimate domains retrieved per query.
pub const DEFAULT_TOP_K: usize = 3;

/// Baseline of the URL Similarity Index scale. Zero lexical similarity still
/// scores this value (the PhiUSIIL split of 50 base + 50 weighted).
pub const USI_BASE: f64 = 50.0;

/// Portion of the USI scale driven by the edit-similarity ratio.
pub const USI_SPAN: f64 = 100.0 - USI_BASE;

/// USI at or above this is treated as the known-good domain itself.
pub const LEGITIMATE_FLOOR: f64 = 98.0;

/// USI at or above this (below [`LEGITIMATE_FLOOR`]) is a phishing verdict.
pub const PHISHING_FLOOR: f64 = 90.0;

/// USI at or above this (below [`PHISHING_FLOOR`]) is likely phishing.
pub const LIKELY_PHISHING_FLOOR: f64 = 80.0;

/// USI at or above this (below [`LIKELY_PHISHING_FLOOR`]) is deferred to a
/// downstream model. Anything lower is unrelated to the known corpus.
pub const SEND_TO_MODEL_FLOOR: f64 = 60.0;

/// On-disk artifact bundle format version.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;
