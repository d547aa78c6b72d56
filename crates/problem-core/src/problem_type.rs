//! Reusable problem type templates.

use std::error::Error as StdError;

use serde_json::{Map, Value};

use crate::details::{find_details, normalize_type, ProblemDetails};

/// A reusable problem type that can instantiate new [`ProblemDetails`] values.
///
/// The main use case is as process-lifetime constants shared across handlers,
/// reducing boilerplate and serving as part of the documentation:
///
/// ```rust
/// use std::sync::LazyLock;
/// use problem_core::ProblemType;
///
/// static OUT_OF_CREDIT: LazyLock<ProblemType> = LazyLock::new(|| {
///     ProblemType::new(
///         "https://example.com/probs/out-of-credit",
///         "You do not have enough credit.",
///         403,
///     )
/// });
///
/// let details = OUT_OF_CREDIT
///     .details()
///     .with_detail("Your current balance is 30, but that costs 50.")
///     .with_instance("/account/12345/msgs/abc")
///     .with_extension("balance", 30);
///
/// assert!(OUT_OF_CREDIT.matches(&details));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProblemType {
    /// The type URI, typically with the "http" or "https" scheme.
    pub uri: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code that should be used for responses.
    pub status: u16,

    /// Fixed extensions that are copied into every [`ProblemDetails`]
    /// created from this type.
    pub extensions: Map<String, Value>,
}

impl ProblemType {
    /// Returns a new `ProblemType` with the given URI, title and status.
    pub fn new(uri: impl Into<String>, title: impl Into<String>, status: u16) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
            status,
            extensions: Map::new(),
        }
    }

    /// Adds a fixed extension to the template.
    ///
    /// # Panics
    ///
    /// Panics if the value cannot be represented as JSON, like
    /// [`ProblemDetails::with_extension`].
    pub fn with_extension(mut self, key: impl Into<String>, value: impl serde::Serialize) -> Self {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(err) => panic!("problem extension value cannot be represented as JSON: {err}"),
        };
        self.extensions.insert(key.into(), value);
        self
    }

    /// Creates a new [`ProblemDetails`] instance from this type.
    ///
    /// The instance is seeded with the type's URI, title and status, and the
    /// type's extensions are copied in. The copy keeps the template isolated:
    /// `with_extension` calls on the returned value override individual keys
    /// without affecting this type or other instances.
    pub fn details(&self) -> ProblemDetails {
        let mut details = ProblemDetails::new(self.uri.clone(), self.title.clone(), self.status);

        if !self.extensions.is_empty() {
            details.extensions = self.extensions.clone();
        }

        details
    }

    /// Returns true if `details` matches this type.
    ///
    /// Each of URI, title and status is compared only when it is set on the
    /// type; empty/zero fields act as wildcards. URIs are compared with an
    /// empty value normalized to "about:blank" on both sides. Extensions are
    /// never compared. A type with all fields empty matches any details
    /// value.
    pub fn matches_details(&self, details: &ProblemDetails) -> bool {
        if !self.uri.is_empty() && normalize_type(&self.uri) != normalize_type(&details.type_uri) {
            return false;
        }

        if !self.title.is_empty() && self.title != details.title {
            return false;
        }

        if self.status != 0 && self.status != details.status {
            return false;
        }

        true
    }

    /// Returns true if `err`, or any error in its [`source`](StdError::source)
    /// chain, is a [`ProblemDetails`] matching this type.
    ///
    /// Returns false if no `ProblemDetails` can be found in the chain.
    pub fn matches(&self, err: &(dyn StdError + 'static)) -> bool {
        find_details(err).is_some_and(|details| self.matches_details(details))
    }
}
