use std::sync::Arc;

use crate::index::{FlatIndex, SimilarityIndex};
use crate::pipeline::DomainAnalyzer;

/// Shared handler state: one immutable analyzer for the process lifetime.
pub struct HandlerState<I: SimilarityIndex + 'static = FlatIndex> {
    pub analyzer: Arc<DomainAnalyzer<I>>,
}

impl<I: SimilarityIndex> HandlerState<I> {
    pub fn new(analyzer: Arc<DomainAnalyzer<I>>) -> Self {
        Self { analyzer }
    }
}

// Manual impl: `I` itself need not be `Clone`, only the `Arc` is cloned.
impl<I: SimilarityIndex> Clone for HandlerState<I> {
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}
