use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::artifacts::ArtifactBundle;
use crate::encoder::EncoderConfig;
use crate::pipeline::DomainAnalyzer;

use super::{HandlerState, create_router_with_state};

fn test_router() -> axum::Router {
    let domains = ["paypal.com", "google.com", "facebook.com", "amazon.com"]
        .iter()
        .map(|d| d.to_string())
        .collect();
    let bundle = ArtifactBundle::build(domains, EncoderConfig::default()).expect("build");
    let analyzer = DomainAnalyzer::with_default_top_k(bundle.into_retriever().expect("retriever"));
    create_router_with_state(HandlerState::new(Arc::new(analyzer)))
}

fn analyze_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn test_healthz_reports_ok() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_ready_reports_loaded_artifacts() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["corpus_size"], 4);
    assert_eq!(body["top_k"], 3);
    assert!(body["vocab_size"].as_u64().expect("vocab_size") > 0);
}

#[tokio::test]
async fn test_analyze_typo_domain_returns_phishing() {
    let response = test_router()
        .oneshot(analyze_request(serde_json::json!({"domain": "paypa1.com"})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["domain"], "paypa1.com");
    assert_eq!(body["best_match"], "paypal.com");
    assert_eq!(body["best_score"], 95.0);
    assert_eq!(body["verdict"], "PHISHING");
    assert!(body["scores"].is_object());
}

#[tokio::test]
async fn test_analyze_exact_domain_returns_legitimate() {
    let response = test_router()
        .oneshot(analyze_request(serde_json::json!({"domain": "amazon.com"})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["best_score"], 100.0);
    assert_eq!(body["verdict"], "LEGITIMATE");
}

#[tokio::test]
async fn test_analyze_empty_domain_is_unprocessable() {
    let response = test_router()
        .oneshot(analyze_request(serde_json::json!({"domain": ""})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .contains("empty")
    );
}

#[tokio::test]
async fn test_analyze_rejects_missing_domain_field() {
    let response = test_router()
        .oneshot(analyze_request(serde_json::json!({"name": "paypal.com"})))
        .await
        .expect("response");

    // Axum's Json extractor rejects the malformed body before the handler.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
