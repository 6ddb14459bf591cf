use super::{IndexError, Neighbor, SimilarityIndex};

/// Scripted index for exercising retriever error paths without a real build.
#[derive(Debug, Default, Clone)]
pub struct MockSimilarityIndex {
    neighbors: Vec<Neighbor>,
    len: usize,
    dim: usize,
    fail_search: bool,
}

impl MockSimilarityIndex {
    /// Index that reports `len`/`dim` and returns `neighbors` from every
    /// search (still truncated to `k`).
    pub fn with_neighbors(len: usize, dim: usize, neighbors: Vec<Neighbor>) -> Self {
        Self {
            neighbors,
            len,
            dim,
            fail_search: false,
        }
    }

    /// Index whose every search fails with a dimension mismatch.
    pub fn failing(len: usize, dim: usize) -> Self {
        Self {
            neighbors: Vec::new(),
            len,
            dim,
            fail_search: true,
        }
    }
}

impl SimilarityIndex for MockSimilarityIndex {
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, IndexError> {
        if self.fail_search {
            return Err(IndexError::DimensionMismatch {
                expected: self.dim,
                actual: query.len(),
            });
        }

        let mut neighbors = self.neighbors.clone();
        neighbors.truncate(k);
        Ok(neighbors)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn dim(&self) -> usize {
        self.dim
    }
}
