//! # Problem HTTP
//!
//! HTTP integration for RFC 9457 problem details.
//!
//! This crate provides:
//! - An axum response adapter that serves a [`ProblemDetails`] with the
//!   problem media type and correct headers
//! - A panic recovery layer that turns handler panics into problem responses
//! - Reqwest helpers for parsing problem bodies out of responses
//!
//! ## Server Example
//!
//! ```ignore
//! use axum::{routing::get, Router};
//! use problem_core::ProblemDetails;
//! use problem_http::{problem_recovery_layer, ProblemJson};
//!
//! async fn handler() -> Result<&'static str, ProblemJson> {
//!     Err(ProblemDetails::new("https://example.com/probs/out-of-credit", "Out of credit", 403)
//!         .into())
//! }
//!
//! let app = Router::new()
//!     .route("/", get(handler))
//!     .layer(problem_recovery_layer());
//! ```
//!
//! ## Client Example
//!
//! ```ignore
//! use problem_http::ProblemResponseExt;
//!
//! let response = reqwest::get("http://localhost:8080/").await?;
//! if let Some(details) = response.problem_details().await? {
//!     eprintln!("server reported a problem: {details}");
//! }
//! ```
//!
//! [`ProblemDetails`]: problem_core::ProblemDetails

mod client;
mod error;
mod recover;
mod response;

pub use client::{parse_problem, ProblemResponseExt};
pub use error::ProblemHttpError;
pub use recover::{internal_server_error, problem_recovery_layer, ProblemPanicHandler, ProblemRecoveryLayer};
pub use response::{problem_response, ProblemJson};
