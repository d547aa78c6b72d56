//! Demo request handlers

use std::sync::LazyLock;

use axum::extract::Path;
use axum::Json;
use problem_core::ProblemType;
use problem_http::ProblemJson;
use serde::Serialize;

/// Problem type for accounts without enough credit, with a fixed extension
/// every instance inherits.
static OUT_OF_CREDIT: LazyLock<ProblemType> = LazyLock::new(|| {
    ProblemType::new(
        "https://example.com/probs/out-of-credit",
        "You do not have enough credit.",
        403,
    )
    .with_extension("support", "https://example.com/help/credit")
});

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Receipt returned when a charge succeeds
#[derive(Serialize)]
pub struct ChargeReceipt {
    account: String,
    balance: i64,
}

/// Charges credit from an account. Every account in this demo is broke, so
/// the handler always answers with a problem response.
pub async fn charge_credit(Path(account): Path<String>) -> Result<Json<ChargeReceipt>, ProblemJson> {
    tracing::info!(account = %account, "charging credit");

    Err(OUT_OF_CREDIT
        .details()
        .with_detail("Your current balance is 30, but that costs 50.")
        .with_instance(format!("/account/{account}/credit"))
        .with_extension("balance", 30)
        .into())
}

/// Panics mid-request to demonstrate the recovery layer. The client still
/// receives a well-formed problem response instead of a dropped connection.
pub async fn panic_demo() -> &'static str {
    panic!("handler state corrupted");
}
