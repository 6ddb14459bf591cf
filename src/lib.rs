//! Lookalike library crate (used by the server binary and integration
//! tests).
//!
//! Decides whether a suspicious domain is a typosquat of a known-legitimate
//! domain. The pipeline is: encode the domain into a char-n-gram TF-IDF
//! vector, retrieve the nearest legitimate domains by cosine similarity,
//! score each candidate with the Levenshtein-based URL Similarity Index
//! (USI), and classify the best score into a verdict tier.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`DomainAnalyzer`], [`Analysis`] - one-call analysis over loaded
//!   artifacts
//! - [`CandidateRetriever`], [`RankedCandidate`] - candidate retrieval
//! - [`score_candidates`], [`usi_score`], [`UsiScores`] - USI scoring
//! - [`classify`], [`Classification`], [`Verdict`] - verdict tiers
//!
//! ## Encoding & Search
//! - [`NgramEncoder`], [`EncoderConfig`] - char n-gram TF-IDF encoder
//! - [`SimilarityIndex`], [`FlatIndex`], [`Neighbor`] - exact top-K search
//!
//! ## Artifacts & Configuration
//! - [`ArtifactBundle`], [`load_or_build`], [`read_corpus_file`] - the
//!   index/corpus store (built offline, loaded once, read-only afterwards)
//! - [`Config`], [`ConfigError`] - env-backed server configuration
//!
//! ## Errors
//! Each stage surfaces its own error type unchanged; nothing substitutes a
//! default verdict on failure. See [`AnalyzeError`] for the query-time
//! union.
//!
//! ## Test/Mock Support
//! [`MockSimilarityIndex`](index::MockSimilarityIndex) is available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod artifacts;
pub mod config;
pub mod constants;
pub mod encoder;
pub mod gateway;
pub mod index;
pub mod pipeline;
pub mod retriever;
pub mod scoring;
pub mod verdict;

pub use artifacts::{ArtifactBundle, ArtifactLoadError, EncoderState, load_or_build, read_corpus_file};
pub use config::{Config, ConfigError};
pub use encoder::{EncoderConfig, EncodingError, NgramEncoder};
pub use gateway::{HandlerState, create_router_with_state};
pub use index::{FlatIndex, IndexError, Neighbor, SimilarityIndex};
#[cfg(any(test, feature = "mock"))]
pub use index::MockSimilarityIndex;
pub use pipeline::{Analysis, AnalyzeError, DomainAnalyzer};
pub use retriever::{CandidateRetriever, RankedCandidate, RetrieverError};
pub use scoring::{UsiScores, score_candidates, usi_score};
pub use verdict::{Classification, Verdict, VerdictError, classify};
