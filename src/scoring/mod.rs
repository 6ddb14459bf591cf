//! URL Similarity Index (USI) scoring.
//!
//! Maps character-level edit similarity between the suspicious domain and
//! each retrieved candidate onto the PhiUSIIL-derived [50, 100] scale.

pub mod scorer;


pub use scorer::{UsiScores, score_candidates, usi_score};
