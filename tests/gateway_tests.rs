//! In-process HTTP tests against the full router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use lookalike::artifacts::ArtifactBundle;
use lookalike::encoder::EncoderConfig;
use lookalike::gateway::{HandlerState, create_router_with_state};
use lookalike::pipeline::DomainAnalyzer;

fn router() -> axum::Router {
    let domains = ["paypal.com", "google.com", "facebook.com", "amazon.com"]
        .iter()
        .map(|d| d.to_string())
        .collect();
    let bundle = ArtifactBundle::build(domains, EncoderConfig::default()).expect("build");
    let analyzer = DomainAnalyzer::with_default_top_k(bundle.into_retriever().expect("retriever"));
    create_router_with_state(HandlerState::new(Arc::new(analyzer)))
}

async fn post_analyze(domain: &str) -> (StatusCode, serde_json::Value) {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({ "domain": domain }).to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn analyze_end_to_end_verdicts() {
    let cases = [
        ("paypa1.com", "PHISHING"),
        ("amazon.com", "LEGITIMATE"),
        ("gooogle.com", "PHISHING"),
    ];

    for (domain, verdict) in cases {
        let (status, body) = post_analyze(domain).await;
        assert_eq!(status, StatusCode::OK, "{domain}: {body}");
        assert_eq!(body["verdict"], verdict, "{domain}: {body}");
    }
}

#[tokio::test]
async fn analyze_reports_score_map_in_retrieval_order() {
    let (status, body) = post_analyze("paypa1.com").await;

    assert_eq!(status, StatusCode::OK);
    let scores = body["scores"].as_object().expect("scores object");
    assert!(scores.contains_key("paypal.com"));
    assert!(scores.len() <= 3);
}

#[tokio::test]
async fn analyze_empty_domain_is_an_explicit_error() {
    let (status, body) = post_analyze("").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.get("verdict").is_none(), "no default verdict: {body}");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_endpoints_respond() {
    for uri in ["/healthz", "/ready"] {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}
