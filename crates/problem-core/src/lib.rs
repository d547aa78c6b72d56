//! # Problem Core
//!
//! RFC 9457 problem details for Rust.
//!
//! This crate provides:
//! - The [`ProblemDetails`] type with RFC 9457 JSON encoding and decoding
//! - Reusable [`ProblemType`] templates for defining problem categories
//! - Error-chain aware matching between errors and problem types
//!
//! ## Example
//!
//! ```rust
//! use problem_core::ProblemDetails;
//!
//! let details = ProblemDetails::new("https://example.com/probs/out-of-credit", "Out of credit", 403)
//!     .with_detail("Your current balance is 30, but that costs 50.")
//!     .with_instance("/account/12345/msgs/abc")
//!     .with_extension("balance", 30);
//!
//! let json = serde_json::to_string(&details).unwrap();
//! let parsed: ProblemDetails = serde_json::from_str(&json).unwrap();
//! assert_eq!(details, parsed);
//! ```

pub mod details;
pub mod problem_type;

// Re-exports for convenience
pub use details::*;
pub use problem_type::*;

/// The default problem type URI, equivalent to not specifying a problem type.
///
/// See also <https://datatracker.ietf.org/doc/html/rfc9457#name-aboutblank>
pub const ABOUT_BLANK_TYPE_URI: &str = "about:blank";

/// The media type used for problem responses, as registered with IANA.
///
/// See also <https://datatracker.ietf.org/doc/html/rfc9457#name-iana-considerations>
pub const CONTENT_TYPE: &str = "application/problem+json";
