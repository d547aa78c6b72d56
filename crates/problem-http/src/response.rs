//! Axum response adapter for problem details.

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use problem_core::{ProblemDetails, CONTENT_TYPE};

/// Builds an HTTP response serving `details` as `application/problem+json`.
///
/// The response uses the details' status code, falling back to 500 when the
/// status is unset (zero) or not a valid HTTP status. Any `Content-Length`
/// header is dropped, and `X-Content-Type-Options: nosniff` is set, as
/// `http::Error`-style plain-text error responses do.
///
/// # Panics
///
/// Panics if the details cannot be encoded. Extension values are stored as
/// plain JSON values, so this only fires for a broken `Serialize`
/// implementation upstream, which is a bug rather than a runtime condition.
/// Nothing is written to the response before encoding succeeds.
pub fn problem_response(details: &ProblemDetails) -> Response {
    let body = match serde_json::to_vec(details) {
        Ok(body) => body,
        Err(err) => panic!("failed to encode problem details: {err}"),
    };

    let status =
        StatusCode::from_u16(details.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.remove(header::CONTENT_LENGTH);
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE));
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    response
}

/// Wrapper that serves a [`ProblemDetails`] as an axum response.
///
/// Handlers can return `Result<T, ProblemJson>` and convert a
/// `ProblemDetails` with `?` or [`Into::into`].
///
/// # Example
///
/// ```ignore
/// use problem_core::ProblemDetails;
/// use problem_http::ProblemJson;
///
/// async fn handler() -> Result<&'static str, ProblemJson> {
///     Err(ProblemDetails::new("", "Not Found", 404).into())
/// }
/// ```
#[derive(Debug)]
pub struct ProblemJson(pub ProblemDetails);

impl From<ProblemDetails> for ProblemJson {
    fn from(details: ProblemDetails) -> Self {
        Self(details)
    }
}

impl IntoResponse for ProblemJson {
    fn into_response(self) -> Response {
        problem_response(&self.0)
    }
}
