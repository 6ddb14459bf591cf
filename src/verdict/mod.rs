//! Threshold-based verdict classification over USI scores.

mod error;


pub use error::VerdictError;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    LEGITIMATE_FLOOR, LIKELY_PHISHING_FLOOR, PHISHING_FLOOR, SEND_TO_MODEL_FLOOR,
};
use crate::scoring::UsiScores;

/// Final classification outcome for a suspicious domain.
///
/// Both extremes of the scale map to `Legitimate` on purpose: a near-perfect
/// score means the domain effectively *is* the known-good one, while a very
/// low score means it imitates no known brand at all. The asymmetry comes
/// from the source threshold table and is preserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Exact or near-exact match to a known-good domain, or no targeted
    /// impersonation of anything in the corpus.
    Legitimate,
    /// Ambiguous similarity; defer to a downstream model.
    SendToModel,
    /// Strong lexical similarity short of the phishing tier.
    LikelyPhishing,
    /// High similarity to a known-good domain it is not.
    Phishing,
}

impl Verdict {
    /// Maps a USI score onto the tier table. Tiers are evaluated in
    /// descending order with inclusive lower bounds; first match wins.
    pub fn from_score(score: f64) -> Self {
        if score >= LEGITIMATE_FLOOR {
            Verdict::Legitimate
        } else if score >= PHISHING_FLOOR {
            Verdict::Phishing
        } else if score >= LIKELY_PHISHING_FLOOR {
            Verdict::LikelyPhishing
        } else if score >= SEND_TO_MODEL_FLOOR {
            Verdict::SendToModel
        } else {
            Verdict::Legitimate
        }
    }

    /// Wire/display name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Legitimate => "LEGITIMATE",
            Verdict::SendToModel => "SEND_TO_MODEL",
            Verdict::LikelyPhishing => "LIKELY_PHISHING",
            Verdict::Phishing => "PHISHING",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-scoring candidate and its verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// The legitimate domain the suspicious one most resembles.
    pub best_domain: String,
    /// USI score of the best candidate.
    pub best_score: f64,
    /// Tier assigned to `best_score`.
    pub verdict: Verdict,
}

/// Selects the maximum-USI candidate and classifies its score.
///
/// Ties resolve to the first-seen key, which is well-defined because
/// [`UsiScores`] preserves insertion order. Pure function of its input.
pub fn classify(scores: &UsiScores) -> Result<Classification, VerdictError> {
    let mut best: Option<(&str, f64)> = None;
    for (domain, &score) in scores {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((domain.as_str(), score)),
        }
    }

    let (best_domain, best_score) = best.ok_or(VerdictError::EmptyScoreSet)?;
    let verdict = Verdict::from_score(best_score);

    debug!(
        best_domain,
        best_score,
        verdict = %verdict,
        "Classified USI scores"
    );

    Ok(Classification {
        best_domain: best_domain.to_string(),
        best_score,
        verdict,
    })
}
