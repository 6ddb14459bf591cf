use indexmap::IndexMap;
use tracing::debug;

use crate::constants::{USI_BASE, USI_SPAN};

/// Candidate domain to USI score, preserving insertion order.
///
/// The classifier's tie-break depends on first-seen order, so this must stay
/// an ordered mapping.
pub type UsiScores = IndexMap<String, f64>;

/// Scores `suspicious` against each candidate.
///
/// Duplicate candidate strings collapse to a single entry. That is intended:
/// a duplicate carries the same score, so the collapse only affects display.
pub fn score_candidates<S: AsRef<str>>(suspicious: &str, candidates: &[S]) -> UsiScores {
    let mut scores = UsiScores::with_capacity(candidates.len());
    for candidate in candidates {
        let candidate = candidate.as_ref();
        scores.insert(candidate.to_string(), usi_score(suspicious, candidate));
    }

    debug!(
        suspicious,
        candidates = candidates.len(),
        scored = scores.len(),
        "Computed USI scores"
    );

    scores
}

/// USI between two domains: `50 + 50 * r` where
/// `r = 1 - levenshtein(a, b) / max(len(a), len(b))` over the full
/// case-folded strings. Symmetric in its arguments; rounded to 3 decimals.
pub fn usi_score(suspicious: &str, candidate: &str) -> f64 {
    let a = suspicious.to_lowercase();
    let b = candidate.to_lowercase();

    let max_len = a.chars().count().max(b.chars().count());
    let ratio = if max_len == 0 {
        1.0
    } else {
        1.0 - strsim::levenshtein(&a, &b) as f64 / max_len as f64
    };

    round3(USI_BASE + USI_SPAN * ratio)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
