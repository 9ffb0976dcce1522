//! Field-level validation of untyped JSON payloads.
//!
//! Inbound adapters hand the raw request body to the record constructors
//! (`ContactMessage::from_json` and friends), which read it through
//! [`FieldReader`]. Every violated field is collected so a single response can
//! list all problems; nothing here touches storage.

use std::ops::RangeInclusive;

use serde::Serialize;
use serde_json::{Map, Value};

use super::EmailAddress;

/// Field name reported when the payload is not a JSON object at all.
pub const BODY_FIELD: &str = "body";

/// Machine-readable reason attached to each [`FieldViolation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// A required field is absent or `null`.
    MissingField,
    /// The field is present but not a string (or the body is not an object).
    InvalidType,
    /// The string has fewer characters than allowed.
    TooShort,
    /// The string has more characters than allowed.
    TooLong,
    /// The string is not a well-formed email address.
    MalformedEmail,
}

impl ViolationCode {
    /// Stable string form used in error details.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidType => "invalid_type",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::MalformedEmail => "malformed_email",
        }
    }
}

/// One constraint broken by one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    field: &'static str,
    code: ViolationCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl FieldViolation {
    fn new(field: &'static str, code: ViolationCode, message: String) -> Self {
        Self {
            field,
            code,
            message,
            limit: None,
        }
    }

    fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Reason the field was rejected.
    #[must_use]
    pub fn code(&self) -> ViolationCode {
        self.code
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Length bound that was crossed, for `too_short` / `too_long`.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

/// Validation outcome listing every violated field, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("payload failed validation on {} field(s)", .violations.len())]
pub struct ValidationFailure {
    violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    /// All violations, in the order the fields were checked.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether `field` was rejected with `code`.
    #[must_use]
    pub fn has(&self, field: &str, code: ViolationCode) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.field == field && violation.code == code)
    }
}

/// Accumulating reader over a JSON object.
///
/// Each accessor returns `None` when the field is unusable and records why.
pub(crate) struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(payload: &'a Value) -> Result<Self, ValidationFailure> {
        match payload.as_object() {
            Some(object) => Ok(Self {
                object,
                violations: Vec::new(),
            }),
            None => Err(ValidationFailure {
                violations: vec![FieldViolation::new(
                    BODY_FIELD,
                    ViolationCode::InvalidType,
                    "request body must be a JSON object".to_owned(),
                )],
            }),
        }
    }

    pub(crate) fn required_text(
        &mut self,
        field: &'static str,
        length: RangeInclusive<usize>,
    ) -> Option<String> {
        match self.raw_text(field) {
            Some(text) => self.check_length(field, text, &length),
            None => {
                self.missing(field);
                None
            }
        }
    }

    pub(crate) fn optional_text(
        &mut self,
        field: &'static str,
        length: RangeInclusive<usize>,
    ) -> Option<String> {
        let text = self.raw_text(field)?;
        self.check_length(field, text, &length)
    }

    pub(crate) fn required_email(&mut self, field: &'static str) -> Option<EmailAddress> {
        let Some(text) = self.raw_text(field) else {
            self.missing(field);
            return None;
        };
        match EmailAddress::parse(&text) {
            Ok(email) => Some(email),
            Err(err) => {
                self.violations.push(FieldViolation::new(
                    field,
                    ViolationCode::MalformedEmail,
                    format!("{field} must be a valid email address: {err}"),
                ));
                None
            }
        }
    }

    /// Convert the collected violations into a failure.
    pub(crate) fn into_failure(self) -> ValidationFailure {
        ValidationFailure {
            violations: self.violations,
        }
    }

    /// Succeed only when no field was rejected.
    pub(crate) fn finish(self) -> Result<(), ValidationFailure> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self.into_failure())
        }
    }

    /// Read a string field. Absent and `null` both yield `None` silently;
    /// non-string values yield `None` and record an `invalid_type` violation.
    fn raw_text(&mut self, field: &'static str) -> Option<String> {
        match self.object.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => {
                self.violations.push(FieldViolation::new(
                    field,
                    ViolationCode::InvalidType,
                    format!("{field} must be a string"),
                ));
                None
            }
        }
    }

    fn missing(&mut self, field: &'static str) {
        // A wrong-typed field has already been reported.
        if self.violations.iter().any(|violation| violation.field == field) {
            return;
        }
        self.violations.push(FieldViolation::new(
            field,
            ViolationCode::MissingField,
            format!("missing required field: {field}"),
        ));
    }

    fn check_length(
        &mut self,
        field: &'static str,
        text: String,
        length: &RangeInclusive<usize>,
    ) -> Option<String> {
        let count = text.chars().count();
        if count < *length.start() {
            let min = *length.start();
            self.violations.push(
                FieldViolation::new(
                    field,
                    ViolationCode::TooShort,
                    format!("{field} must be at least {min} characters"),
                )
                .with_limit(min),
            );
            return None;
        }
        if count > *length.end() {
            let max = *length.end();
            self.violations.push(
                FieldViolation::new(
                    field,
                    ViolationCode::TooLong,
                    format!("{field} must be at most {max} characters"),
                )
                .with_limit(max),
            );
            return None;
        }
        Some(text)
    }
}
