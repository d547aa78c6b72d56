//! ProblemType template and matching tests

use std::error::Error as StdError;

use problem_core::*;
use serde_json::json;
use thiserror::Error;

/// An error wrapping a problem somewhere in its source chain.
#[derive(Debug, Error)]
#[error("request failed")]
struct Wrapper {
    #[from]
    source: ProblemDetails,
}

fn out_of_credit() -> ProblemType {
    ProblemType::new(
        "https://example.com/probs/out-of-credit",
        "You do not have enough credit.",
        403,
    )
}

mod instantiate {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_details_seeds_fixed_fields() {
        let details = out_of_credit().details();

        assert_eq!(details.type_uri, "https://example.com/probs/out-of-credit");
        assert_eq!(details.title, "You do not have enough credit.");
        assert_eq!(details.status, 403);
        assert_eq!(details.detail, "");
        assert_eq!(details.instance, "");
        assert!(details.extensions.is_empty());
    }

    #[test]
    fn test_call_site_overrides_template_extension() {
        let template = out_of_credit()
            .with_extension("currency", "EUR")
            .with_extension("support", "https://example.com/help");

        let details = template.details().with_extension("currency", "USD");

        // The explicit extension wins, unrelated template keys survive.
        assert_eq!(details.extensions["currency"], json!("USD"));
        assert_eq!(details.extensions["support"], json!("https://example.com/help"));
    }

    #[test]
    fn test_instance_mutation_does_not_leak_into_template() {
        let template = out_of_credit().with_extension("currency", "EUR");

        let _mutated = template.details().with_extension("currency", "USD");
        let fresh = template.details();

        assert_eq!(template.extensions["currency"], json!("EUR"));
        assert_eq!(fresh.extensions["currency"], json!("EUR"));
    }

    #[test]
    fn test_builder_overrides_seeded_fields() {
        let details = out_of_credit()
            .details()
            .with_status(402)
            .with_detail("Your current balance is 30, but that costs 50.");

        assert_eq!(details.status, 402);
        assert_eq!(details.detail, "Your current balance is 30, but that costs 50.");
    }
}

mod matching {
    use super::*;

    #[test]
    fn test_empty_type_matches_anything() {
        let wildcard = ProblemType::default();

        assert!(wildcard.matches_details(&ProblemDetails::default()));
        assert!(wildcard.matches_details(&out_of_credit().details()));
        assert!(wildcard.matches(&out_of_credit().details()));
    }

    #[test]
    fn test_status_only_match_ignores_other_fields() {
        let forbidden = ProblemType {
            status: 403,
            ..ProblemType::default()
        };

        assert!(forbidden.matches_details(&out_of_credit().details()));
        assert!(forbidden.matches_details(&ProblemDetails::new("https://other", "Other", 403)));
        assert!(!forbidden.matches_details(&ProblemDetails::new("https://other", "Other", 404)));
    }

    #[test]
    fn test_all_set_fields_must_match() {
        let template = out_of_credit();
        let mismatched_title = ProblemDetails::new(
            "https://example.com/probs/out-of-credit",
            "Different title",
            403,
        );

        assert!(template.matches_details(&template.details()));
        assert!(!template.matches_details(&mismatched_title));
    }

    #[test]
    fn test_uri_comparison_normalizes_about_blank() {
        let blank = ProblemType::new("about:blank", "", 0);

        assert!(blank.matches_details(&ProblemDetails::default()));
        assert!(blank.matches_details(&ProblemDetails::new("about:blank", "T", 404)));
        assert!(!blank.matches_details(&ProblemDetails::new("https://x/y", "T", 404)));
    }

    #[test]
    fn test_extensions_are_never_compared() {
        let template = out_of_credit().with_extension("currency", "EUR");
        let details = template.details().with_extension("currency", "USD");

        assert!(template.matches_details(&details));
    }

    #[test]
    fn test_match_walks_the_source_chain() {
        let wrapped = Wrapper::from(out_of_credit().details());

        assert!(out_of_credit().matches(&wrapped));
        assert!(!ProblemType::new("https://other", "", 0).matches(&wrapped));
    }

    #[test]
    fn test_non_problem_error_never_matches() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");

        assert!(!ProblemType::default().matches(&err));
    }
}

mod chain {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_details_direct() {
        let details = out_of_credit().details();

        assert!(find_details(&details).is_some());
    }

    #[test]
    fn test_find_details_through_wrapper() {
        let wrapped = Wrapper::from(out_of_credit().details());

        let found = find_details(&wrapped).unwrap();
        assert_eq!(found.status, 403);
    }

    #[test]
    fn test_find_details_through_underlying() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let details = out_of_credit().details().with_underlying(io_err);

        // The problem itself sits at the head of the chain.
        let found = find_details(&details).unwrap();
        assert_eq!(found.title, "You do not have enough credit.");
        assert!(StdError::source(found).is_some());
    }

    #[test]
    fn test_find_details_none() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");

        assert!(find_details(&err).is_none());
    }
}
