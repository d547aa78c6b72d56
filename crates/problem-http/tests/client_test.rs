//! Tests for client-side problem parsing

use problem_core::ProblemDetails;
use problem_http::{parse_problem, ProblemHttpError};

#[test]
fn test_problem_body_is_decoded() {
    let body = br#"{"type":"https://x/y","title":"T","status":403}"#;

    let details = parse_problem(Some("application/problem+json"), body)
        .unwrap()
        .unwrap();

    assert_eq!(details, ProblemDetails::new("https://x/y", "T", 403));
}

#[test]
fn test_media_type_parameters_are_ignored() {
    let body = br#"{"title":"T"}"#;

    let details = parse_problem(Some("application/problem+json; charset=utf-8"), body)
        .unwrap()
        .unwrap();

    assert_eq!(details.title, "T");
}

#[test]
fn test_other_media_types_mean_no_problem() {
    let body = br#"{"title":"T"}"#;

    assert_eq!(parse_problem(Some("application/json"), body).unwrap(), None);
    assert_eq!(parse_problem(None, body).unwrap(), None);
}

#[test]
fn test_malformed_body_is_a_decode_error() {
    let result = parse_problem(Some("application/problem+json"), b"not json");

    assert!(matches!(result, Err(ProblemHttpError::Decode(_))));
}

#[test]
fn test_non_object_body_is_a_decode_error() {
    let result = parse_problem(Some("application/problem+json"), b"[1,2,3]");

    assert!(matches!(result, Err(ProblemHttpError::Decode(_))));
}
