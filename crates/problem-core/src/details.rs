//! The RFC 9457 problem details object and its JSON codec.

use std::error::Error as StdError;
use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::ABOUT_BLANK_TYPE_URI;

/// Member names reserved by RFC 9457 for the fixed fields.
///
/// Extension entries under these keys are shadowed by the corresponding
/// struct field when encoding.
pub(crate) const RESERVED_MEMBERS: [&str; 5] = ["type", "status", "title", "detail", "instance"];

/// An RFC 9457 problem details object.
///
/// `ProblemDetails` also implements [`std::error::Error`] and can optionally
/// wrap an existing error value via [`ProblemDetails::with_underlying`].
///
/// All fields are public and a value can be built with a struct literal, via
/// [`ProblemDetails::new`] plus the `with_*` builder methods, or from a
/// reusable [`ProblemType`](crate::ProblemType) template.
#[derive(Debug, Default)]
pub struct ProblemDetails {
    /// The problem type as a URI.
    ///
    /// If empty, this is the same as "about:blank". See
    /// [`ABOUT_BLANK_TYPE_URI`] for more information.
    ///
    /// See also <https://datatracker.ietf.org/doc/html/rfc9457#name-type>
    pub type_uri: String,

    /// The HTTP status code generated for this occurrence of the problem.
    ///
    /// This should be the same code as used for the HTTP response and is only
    /// advisory. Zero means unset and is omitted when encoding.
    ///
    /// See also <https://datatracker.ietf.org/doc/html/rfc9457#name-status>
    pub status: u16,

    /// A short, human-readable summary of the problem type.
    ///
    /// See also <https://datatracker.ietf.org/doc/html/rfc9457#name-title>
    pub title: String,

    /// A human-readable explanation specific to this occurrence of the problem.
    ///
    /// See also <https://datatracker.ietf.org/doc/html/rfc9457#name-detail>
    pub detail: String,

    /// A URI reference that identifies the specific occurrence of the problem.
    ///
    /// See also <https://datatracker.ietf.org/doc/html/rfc9457#name-instance>
    pub instance: String,

    /// Extension members added to the encoded object.
    ///
    /// If the problem was parsed from a JSON response this holds all
    /// extension fields.
    ///
    /// See also <https://datatracker.ietf.org/doc/html/rfc9457#name-extension-members>
    pub extensions: Map<String, Value>,

    /// The underlying error that led to / is described by this problem.
    ///
    /// Not part of RFC 9457: never included in generated JSON and never
    /// populated when decoding. Exposed through
    /// [`std::error::Error::source`].
    pub underlying: Option<Box<dyn StdError + Send + Sync>>,
}

impl ProblemDetails {
    /// Returns a new `ProblemDetails` with the given type URI, title and status.
    ///
    /// Optional fields and extensions can be filled in with the `with_*`
    /// builder methods. Most users should prefer a struct literal or
    /// [`ProblemType::details`](crate::ProblemType::details) instead.
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: u16) -> Self {
        Self {
            type_uri: type_uri.into(),
            status,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Sets the detail member.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Sets the instance member.
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = instance.into();
        self
    }

    /// Adds the given key-value pair to the extensions, replacing any
    /// previous value under the same key.
    ///
    /// # Panics
    ///
    /// Panics if the value cannot be represented as JSON. A `Serialize`
    /// implementation that fails here is a bug in the caller, not a runtime
    /// condition, so it is not surfaced as a recoverable error.
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(err) => panic!("problem extension value cannot be represented as JSON: {err}"),
        };
        self.extensions.insert(key.into(), value);
        self
    }

    /// Merges the given members into the extensions, replacing previous
    /// values on key collision.
    pub fn with_extensions(mut self, extensions: Map<String, Value>) -> Self {
        self.extensions.extend(extensions);
        self
    }

    /// Sets the given error as the underlying cause of this problem.
    pub fn with_underlying(mut self, err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        self.underlying = Some(err.into());
        self
    }
}

/// Returns the type URI with an empty value rewritten to "about:blank".
pub(crate) fn normalize_type(uri: &str) -> &str {
    if uri.is_empty() {
        ABOUT_BLANK_TYPE_URI
    } else {
        uri
    }
}

/// Walks the [`source`](StdError::source) chain of `err`, returning the
/// first [`ProblemDetails`] found.
pub fn find_details<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a ProblemDetails> {
    let mut current = Some(err);

    while let Some(err) = current {
        if let Some(details) = err.downcast_ref::<ProblemDetails>() {
            return Some(details);
        }
        current = err.source();
    }

    None
}

impl fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl StdError for ProblemDetails {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.underlying
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}

/// Compares the five RFC 9457 members and the extensions.
///
/// The `underlying` error is intentionally excluded: it is not part of the
/// wire representation and error trait objects are not comparable.
impl PartialEq for ProblemDetails {
    fn eq(&self, other: &Self) -> bool {
        self.type_uri == other.type_uri
            && self.status == other.status
            && self.title == other.title
            && self.detail == other.detail
            && self.instance == other.instance
            && self.extensions == other.extensions
    }
}

/// Encodes the value as a single flat JSON object.
///
/// The `type` member is always emitted; an empty [`type_uri`] is rewritten
/// to "about:blank". The other fixed members are omitted while empty/zero.
/// Extension entries under a reserved member name are skipped in favor of
/// the struct field, even when that field is empty.
///
/// [`type_uri`]: ProblemDetails::type_uri
impl Serialize for ProblemDetails {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;

        map.serialize_entry("type", normalize_type(&self.type_uri))?;

        if self.status != 0 {
            map.serialize_entry("status", &self.status)?;
        }

        if !self.title.is_empty() {
            map.serialize_entry("title", &self.title)?;
        }

        if !self.detail.is_empty() {
            map.serialize_entry("detail", &self.detail)?;
        }

        if !self.instance.is_empty() {
            map.serialize_entry("instance", &self.instance)?;
        }

        for (key, value) in &self.extensions {
            if RESERVED_MEMBERS.contains(&key.as_str()) {
                continue;
            }

            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

/// Decodes a JSON object into a `ProblemDetails`.
///
/// As required by RFC 9457, a known member whose value has the wrong type is
/// ignored and the field keeps its default. For example a "status" member
/// holding the JSON string "400" is skipped even though it could be parsed
/// as an integer. All remaining members become extensions.
///
/// Anything other than a JSON object is a decode error.
impl<'de> Deserialize<'de> for ProblemDetails {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut members = Map::<String, Value>::deserialize(deserializer)?;
        let mut details = ProblemDetails::default();

        // remove() consumes the member whether or not the type matches, so
        // a wrong-typed reserved member never leaks into the extensions.
        if let Some(Value::String(type_uri)) = members.remove("type") {
            details.type_uri = type_uri;
        }

        if let Some(Value::Number(number)) = members.remove("status") {
            if let Some(status) = integral_status(&number) {
                details.status = status;
            }
        }

        if let Some(Value::String(title)) = members.remove("title") {
            details.title = title;
        }

        if let Some(Value::String(detail)) = members.remove("detail") {
            details.detail = detail;
        }

        if let Some(Value::String(instance)) = members.remove("instance") {
            details.instance = instance;
        }

        details.extensions = members;

        Ok(details)
    }
}

/// Returns the status as `u16` if the number is a non-negative integer in
/// range, mirroring the "ignore member with wrong type" rule otherwise.
fn integral_status(number: &serde_json::Number) -> Option<u16> {
    let status = number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|value| value.fract() == 0.0 && *value >= 0.0)
            .map(|value| value as u64)
    })?;

    u16::try_from(status).ok()
}
