//! Tests for the problem response adapter

use axum::body::to_bytes;
use axum::http::header;
use problem_core::{ProblemDetails, CONTENT_TYPE};
use problem_http::problem_response;
use serde_json::{json, Value};

#[tokio::test]
async fn test_serve_writes_status_headers_and_body() {
    let details = ProblemDetails::new("https://x/y", "T", 403);

    let response = problem_response(&details);

    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), CONTENT_TYPE);
    assert_eq!(
        response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
        "nosniff"
    );
    assert!(response.headers().get(header::CONTENT_LENGTH).is_none());

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({"type": "https://x/y", "status": 403, "title": "T"})
    );
}

#[tokio::test]
async fn test_unset_status_falls_back_to_500() {
    let details = ProblemDetails::new("", "T", 0);

    let response = problem_response(&details);

    assert_eq!(response.status().as_u16(), 500);

    // The advisory status stays absent from the body; only the status line
    // carries the fallback.
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({"type": "about:blank", "title": "T"})
    );
}

#[tokio::test]
async fn test_extensions_reach_the_wire() {
    let details = ProblemDetails::new("https://x/y", "Out of credit", 403)
        .with_extension("balance", 30)
        .with_extension("accounts", vec!["/account/12345", "/account/67890"]);

    let response = problem_response(&details);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({
            "type": "https://x/y",
            "status": 403,
            "title": "Out of credit",
            "balance": 30,
            "accounts": ["/account/12345", "/account/67890"],
        })
    );
}
