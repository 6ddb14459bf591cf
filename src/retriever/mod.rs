//! Candidate retrieval: encode the suspicious domain, search the index, map
//! hits back to corpus domain strings.
//!
//! Pure retrieval; verdict logic lives in [`crate::verdict`].

mod error;


pub use error::RetrieverError;

use tracing::debug;

use crate::encoder::NgramEncoder;
use crate::index::{FlatIndex, SimilarityIndex};

/// A retrieved legitimate domain with its vector similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    /// The candidate legitimate domain.
    pub domain: String,
    /// Cosine similarity between query and candidate vectors.
    pub similarity: f32,
}

/// Read-only retrieval context: encoder state, index, and corpus, validated
/// to describe the same artifact build.
///
/// Shared across concurrent queries without locking; every method takes
/// `&self` and nothing mutates after construction.
#[derive(Debug, Clone)]
pub struct CandidateRetriever<I = FlatIndex> {
    encoder: NgramEncoder,
    index: I,
    corpus: Vec<String>,
}

impl<I: SimilarityIndex> CandidateRetriever<I> {
    /// Assembles a retriever, checking the cross-artifact invariants: a
    /// non-empty corpus, one stored vector per corpus domain, and index
    /// dimensionality equal to the encoder vocabulary size.
    pub fn new(encoder: NgramEncoder, index: I, corpus: Vec<String>) -> Result<Self, RetrieverError> {
        if corpus.is_empty() {
            return Err(RetrieverError::IndexUnavailable {
                reason: "corpus is empty".to_string(),
            });
        }

        if index.len() != corpus.len() {
            return Err(RetrieverError::IndexUnavailable {
                reason: format!(
                    "index holds {} vectors for {} corpus domains",
                    index.len(),
                    corpus.len()
                ),
            });
        }

        if index.dim() != encoder.vocab_size() {
            return Err(RetrieverError::IndexUnavailable {
                reason: format!(
                    "index dimension {} does not match encoder vocabulary size {}",
                    index.dim(),
                    encoder.vocab_size()
                ),
            });
        }

        Ok(Self {
            encoder,
            index,
            corpus,
        })
    }

    /// Returns up to `top_k` legitimate domains nearest to `domain` in the
    /// n-gram vector space, descending by similarity.
    pub fn get_candidates(
        &self,
        domain: &str,
        top_k: usize,
    ) -> Result<Vec<RankedCandidate>, RetrieverError> {
        let query = self.encoder.encode(domain)?;
        let neighbors = self.index.search(&query, top_k)?;

        let mut candidates = Vec::with_capacity(neighbors.len());
        for neighbor in neighbors {
            let domain = self.corpus.get(neighbor.id).cloned().ok_or_else(|| {
                RetrieverError::IndexUnavailable {
                    reason: format!(
                        "index returned id {} beyond corpus size {}",
                        neighbor.id,
                        self.corpus.len()
                    ),
                }
            })?;

            candidates.push(RankedCandidate {
                domain,
                similarity: neighbor.score,
            });
        }

        debug!(
            domain,
            top_k,
            retrieved = candidates.len(),
            best_similarity = candidates.first().map(|c| c.similarity),
            "Retrieved candidate domains"
        );

        Ok(candidates)
    }

    /// The legitimate-domain corpus, in id order.
    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    /// The encoder this retriever queries with.
    pub fn encoder(&self) -> &NgramEncoder {
        &self.encoder
    }
}
