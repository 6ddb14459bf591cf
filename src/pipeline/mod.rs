//! The detection pipeline: retrieve candidates, score them, classify the
//! best one.
//!
//! [`DomainAnalyzer`] is the explicit immutable context object for a loaded
//! artifact build. It holds no per-query state: every call to
//! [`analyze`](DomainAnalyzer::analyze) is independent, and one analyzer is
//! safely shared across threads behind an `Arc`.

mod error;

#[cfg(test)]
mod tests;

pub use error::AnalyzeError;

use serde::Serialize;
use tracing::info;

use crate::constants::DEFAULT_TOP_K;
use crate::index::{FlatIndex, SimilarityIndex};
use crate::retriever::CandidateRetriever;
use crate::scoring::{UsiScores, score_candidates};
use crate::verdict::{Verdict, classify};

/// Full result of analyzing one suspicious domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// The suspicious domain as submitted.
    pub domain: String,
    /// Legitimate domain the input most resembles.
    pub best_match: String,
    /// USI score of the best match, in [50, 100].
    pub best_score: f64,
    /// Verdict tier for the best score.
    pub verdict: Verdict,
    /// USI per retrieved candidate, in retrieval order.
    pub scores: UsiScores,
}

/// One-stop analyzer over a loaded artifact build.
#[derive(Debug, Clone)]
pub struct DomainAnalyzer<I = FlatIndex> {
    retriever: CandidateRetriever<I>,
    top_k: usize,
}

impl<I: SimilarityIndex> DomainAnalyzer<I> {
    /// Wraps a retriever with an explicit candidate count. `top_k` is
    /// clamped to at least 1; retrieving zero candidates can never produce
    /// a verdict.
    pub fn new(retriever: CandidateRetriever<I>, top_k: usize) -> Self {
        Self {
            retriever,
            top_k: top_k.max(1),
        }
    }

    /// Wraps a retriever with the default candidate count.
    pub fn with_default_top_k(retriever: CandidateRetriever<I>) -> Self {
        Self::new(retriever, DEFAULT_TOP_K)
    }

    /// Number of candidates retrieved per query.
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// The underlying retrieval context.
    pub fn retriever(&self) -> &CandidateRetriever<I> {
        &self.retriever
    }

    /// Runs the full pipeline for one suspicious domain.
    pub fn analyze(&self, domain: &str) -> Result<Analysis, AnalyzeError> {
        let candidates = self.retriever.get_candidates(domain, self.top_k)?;
        let names: Vec<&str> = candidates.iter().map(|c| c.domain.as_str()).collect();

        let scores = score_candidates(domain, &names);
        let classification = classify(&scores)?;

        info!(
            domain,
            best_match = %classification.best_domain,
            best_score = classification.best_score,
            verdict = %classification.verdict,
            "Analyzed suspicious domain"
        );

        Ok(Analysis {
            domain: domain.to_string(),
            best_match: classification.best_domain,
            best_score: classification.best_score,
            verdict: classification.verdict,
            scores,
        })
    }
}
