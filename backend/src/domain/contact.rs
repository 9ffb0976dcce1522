//! Contact form submissions.

use std::ops::RangeInclusive;

use serde::Serialize;
use serde_json::Value;

use super::EmailAddress;
use super::validation::{FieldReader, ValidationFailure};

/// Allowed length of the sender's name.
pub const CONTACT_NAME_LENGTH: RangeInclusive<usize> = 2..=120;
/// Allowed length of the optional subject line.
pub const CONTACT_SUBJECT_LENGTH: RangeInclusive<usize> = 0..=200;
/// Allowed length of the message body.
pub const CONTACT_MESSAGE_LENGTH: RangeInclusive<usize> = 10..=5000;

/// A validated message sent through the portfolio contact form.
///
/// `source` records where the message came from (web, mobile, ...); it is
/// free-form and unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    name: String,
    email: EmailAddress,
    subject: Option<String>,
    message: String,
    source: Option<String>,
}

impl ContactMessage {
    /// Validate an untyped JSON payload.
    ///
    /// # Errors
    /// Returns every violated field when the payload does not satisfy the
    /// contact message constraints.
    ///
    /// # Examples
    /// ```
    /// use portfolio_backend::domain::ContactMessage;
    /// use serde_json::json;
    ///
    /// let message = ContactMessage::from_json(&json!({
    ///     "name": "Jo Doe",
    ///     "email": "jo@example.com",
    ///     "message": "Hello, I love your robots!",
    /// }))
    /// .expect("valid contact message");
    /// assert_eq!(message.name(), "Jo Doe");
    /// ```
    pub fn from_json(payload: &Value) -> Result<Self, ValidationFailure> {
        let mut reader = FieldReader::new(payload)?;
        let name = reader.required_text("name", CONTACT_NAME_LENGTH);
        let email = reader.required_email("email");
        let subject = reader.optional_text("subject", CONTACT_SUBJECT_LENGTH);
        let message = reader.required_text("message", CONTACT_MESSAGE_LENGTH);
        let source = reader.optional_text("source", 0..=usize::MAX);

        let (Some(name), Some(email), Some(message)) = (name, email, message) else {
            return Err(reader.into_failure());
        };
        reader.finish()?;
        Ok(Self {
            name,
            email,
            subject,
            message,
            source,
        })
    }

    /// Sender's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sender's address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Optional subject line.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the message came from.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
