//! Nearest-neighbor search over the legitimate-domain vectors.
//!
//! [`FlatIndex`] is the exact brute-force backend and the reference oracle
//! for any approximate replacement: an alternative implementation of
//! [`SimilarityIndex`] must still return the true top-1 for near-duplicate
//! vectors, or the downstream scorer misclassifies exact-match domains.

mod error;

#[cfg(any(test, feature = "mock"))]
mod mock;


pub use error::IndexError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSimilarityIndex;

use std::cmp::Ordering;

/// One search hit: a corpus id and its inner-product score.
///
/// Both sides are L2-normalized, so the score is cosine similarity in
/// [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the matched domain in the corpus.
    pub id: usize,
    /// Cosine similarity between query and stored vector.
    pub score: f32,
}

/// Top-K retrieval by inner product over normalized vectors.
///
/// Implementations are immutable after construction and safe to share across
/// concurrent queries.
pub trait SimilarityIndex: Send + Sync {
    /// Returns up to `k` neighbors ordered by descending score, ties broken
    /// by ascending corpus id.
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, IndexError>;

    /// Number of stored vectors.
    fn len(&self) -> usize;

    /// Returns `true` if the index holds no vectors.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensionality of stored vectors.
    fn dim(&self) -> usize;
}

/// Exact brute-force inner-product index.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    vectors: Vec<Vec<f32>>,
    dim: usize,
}

impl FlatIndex {
    /// Builds the index from pre-normalized vectors.
    ///
    /// Vector order defines corpus ids; the caller must keep it aligned with
    /// the corpus domain list.
    pub fn new(vectors: Vec<Vec<f32>>) -> Result<Self, IndexError> {
        let dim = vectors.first().map_or(0, Vec::len);

        for (id, vector) in vectors.iter().enumerate() {
            if vector.len() != dim {
                return Err(IndexError::DimensionMismatch {
                    expected: dim,
                    actual: vector.len(),
                });
            }
            if vector.iter().any(|v| !v.is_finite()) {
                return Err(IndexError::NonFiniteVector { id });
            }
        }

        Ok(Self { vectors, dim })
    }
}

impl SimilarityIndex for FlatIndex {
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, IndexError> {
        if !self.vectors.is_empty() && query.len() != self.dim {
            return Err(IndexError::DimensionMismatch {
                expected: self.dim,
                actual: query.len(),
            });
        }

        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(id, vector)| Neighbor {
                id,
                score: dot(query, vector),
            })
            .collect();

        // Deterministic for a fixed index build: equal scores resolve to the
        // lower corpus id.
        neighbors.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });

        neighbors.truncate(k);
        Ok(neighbors)
    }

    fn len(&self) -> usize {
        self.vectors.len()
    }

    fn dim(&self) -> usize {
        self.dim
    }
}

#[inline]
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
