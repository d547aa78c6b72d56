//! Problem Details Demo Server
//!
//! A local test server showing problem responses and panic recovery.
//!
//! Usage:
//!   cargo run --package problem-server
//!
//! Then try:
//!   curl -i http://localhost:8080/health
//!   curl -i http://localhost:8080/account/12345/credit
//!   curl -i http://localhost:8080/panic

mod handlers;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use problem_http::problem_recovery_layer;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "problem_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build router
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/account/:id/credit", get(handlers::charge_credit))
        .route("/panic", get(handlers::panic_demo))
        // Middleware: the recovery layer is added first so it sits closest
        // to the handlers and the outer layers see a normal response.
        .layer(problem_recovery_layer())
        .layer(CorsLayer::new().allow_origin(Any))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    tracing::info!("Problem demo server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");

    axum::serve(listener, app).await.expect("server error");
}
