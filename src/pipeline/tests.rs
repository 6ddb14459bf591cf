use super::*;

use crate::artifacts::ArtifactBundle;
use crate::encoder::{EncoderConfig, EncodingError};
use crate::retriever::RetrieverError;
use crate::verdict::Verdict;

const CORPUS: [&str; 5] = [
    "paypal.com",
    "google.com",
    "facebook.com",
    "amazon.com",
    "microsoft.com",
];

fn analyzer() -> DomainAnalyzer {
    let domains = CORPUS.iter().map(|d| d.to_string()).collect();
    let bundle = ArtifactBundle::build(domains, EncoderConfig::default()).expect("build");
    DomainAnalyzer::with_default_top_k(bundle.into_retriever().expect("retriever"))
}

#[test]
fn test_single_substitution_typo_is_phishing() {
    let analysis = analyzer().analyze("paypa1.com").expect("analyze");

    assert_eq!(analysis.best_match, "paypal.com");
    // 10 chars, 1 substitution: r = 0.9, USI = 95.0.
    assert_eq!(analysis.best_score, 95.0);
    assert_eq!(analysis.verdict, Verdict::Phishing);
}

#[test]
fn test_exact_corpus_domain_is_legitimate() {
    let analysis = analyzer().analyze("amazon.com").expect("analyze");

    assert_eq!(analysis.best_match, "amazon.com");
    assert_eq!(analysis.best_score, 100.0);
    assert_eq!(analysis.verdict, Verdict::Legitimate);
}

#[test]
fn test_unrelated_domain_is_legitimate_via_low_score() {
    // "xk29qz.net" shares no n-grams with the corpus: retrieval falls back
    // to ascending corpus ids, and every USI lands below 60.
    let analysis = analyzer().analyze("xk29qz.net").expect("analyze");

    assert!(
        analysis.best_score < 60.0,
        "best score {} should be below the SEND_TO_MODEL floor",
        analysis.best_score
    );
    assert_eq!(analysis.verdict, Verdict::Legitimate);
}

#[test]
fn test_scores_are_reported_per_candidate() {
    let analysis = analyzer().analyze("paypa1.com").expect("analyze");

    assert!(!analysis.scores.is_empty());
    assert!(analysis.scores.len() <= 3);
    assert!(analysis.scores.contains_key("paypal.com"));
    assert!(
        analysis
            .scores
            .values()
            .all(|&s| (50.0..=100.0).contains(&s))
    );
}

#[test]
fn test_analysis_is_deterministic() {
    let analyzer = analyzer();

    let first = analyzer.analyze("gooogle.com").expect("analyze");
    let second = analyzer.analyze("gooogle.com").expect("analyze");
    assert_eq!(first, second);
}

#[test]
fn test_empty_domain_is_an_error_not_a_verdict() {
    let result = analyzer().analyze("");
    assert!(matches!(
        result,
        Err(AnalyzeError::Retrieval(RetrieverError::Encoding(
            EncodingError::EmptyDomain
        )))
    ));
}

#[test]
fn test_top_k_is_clamped_to_at_least_one() {
    let domains = CORPUS.iter().map(|d| d.to_string()).collect();
    let bundle = ArtifactBundle::build(domains, EncoderConfig::default()).expect("build");
    let analyzer = DomainAnalyzer::new(bundle.into_retriever().expect("retriever"), 0);

    assert_eq!(analyzer.top_k(), 1);
    let analysis = analyzer.analyze("paypa1.com").expect("analyze");
    assert_eq!(analysis.scores.len(), 1);
}
