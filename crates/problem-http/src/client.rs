//! Client-side parsing of problem responses.

use async_trait::async_trait;
use problem_core::{ProblemDetails, CONTENT_TYPE};
use reqwest::header;

use crate::error::ProblemHttpError;

/// Parses a response body as problem details.
///
/// Returns `Ok(None)` ("no problem present") unless `content_type` is the
/// problem media type; parameters after `;` and ASCII case are ignored for
/// the comparison. Once the media type matches, a malformed body is a
/// [`ProblemHttpError::Decode`] error.
pub fn parse_problem(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Option<ProblemDetails>, ProblemHttpError> {
    if !is_problem_content_type(content_type) {
        return Ok(None);
    }

    let details = serde_json::from_slice(body)?;

    Ok(Some(details))
}

/// Compares the media type ignoring parameters and ASCII case.
fn is_problem_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return false;
    };

    let media_type = content_type.split(';').next().unwrap_or_default().trim();

    media_type.eq_ignore_ascii_case(CONTENT_TYPE)
}

/// Extension trait for reading problem details out of a [`reqwest::Response`].
#[async_trait]
pub trait ProblemResponseExt {
    /// Decodes the response body as problem details if the response carries
    /// the problem media type, per [`parse_problem`].
    async fn problem_details(self) -> Result<Option<ProblemDetails>, ProblemHttpError>;
}

#[async_trait]
impl ProblemResponseExt for reqwest::Response {
    async fn problem_details(self) -> Result<Option<ProblemDetails>, ProblemHttpError> {
        let content_type = self
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = self.bytes().await?;

        parse_problem(content_type.as_deref(), &body)
    }
}
