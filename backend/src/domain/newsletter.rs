//! Newsletter sign-ups.

use std::ops::RangeInclusive;

use serde::Serialize;
use serde_json::Value;

use super::EmailAddress;
use super::validation::{FieldReader, ValidationFailure};

/// Allowed length of the optional subscriber name.
pub const SUBSCRIBER_NAME_LENGTH: RangeInclusive<usize> = 0..=120;

/// A validated newsletter subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterSubscriber {
    email: EmailAddress,
    name: Option<String>,
}

impl NewsletterSubscriber {
    /// Validate an untyped JSON payload.
    ///
    /// # Errors
    /// Returns every violated field when the payload is not a valid
    /// subscription.
    pub fn from_json(payload: &Value) -> Result<Self, ValidationFailure> {
        let mut reader = FieldReader::new(payload)?;
        let email = reader.required_email("email");
        let name = reader.optional_text("name", SUBSCRIBER_NAME_LENGTH);

        let Some(email) = email else {
            return Err(reader.into_failure());
        };
        reader.finish()?;
        Ok(Self { email, name })
    }

    /// Subscriber's address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Optional display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViolationCode;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({ "email": "reader@example.com" }), None)]
    #[case(json!({ "email": "reader@example.com", "name": null }), None)]
    #[case(json!({ "email": "reader@example.com", "name": "Reader" }), Some("Reader"))]
    fn accepts_valid_subscriptions(#[case] payload: Value, #[case] name: Option<&str>) {
        let subscriber = NewsletterSubscriber::from_json(&payload).expect("valid payload");
        assert_eq!(subscriber.email().as_ref(), "reader@example.com");
        assert_eq!(subscriber.name(), name);
    }

    #[rstest]
    fn accepts_empty_name() {
        let payload = json!({ "email": "reader@example.com", "name": "" });
        let subscriber = NewsletterSubscriber::from_json(&payload).expect("valid payload");
        assert_eq!(subscriber.name(), Some(""));
    }

    #[rstest]
    fn reports_email_and_name_together() {
        let payload = json!({ "email": "reader", "name": "r".repeat(121) });
        let failure = NewsletterSubscriber::from_json(&payload).expect_err("rejected");
        assert!(failure.has("email", ViolationCode::MalformedEmail));
        assert!(failure.has("name", ViolationCode::TooLong));
    }

    #[rstest]
    fn requires_email() {
        let failure =
            NewsletterSubscriber::from_json(&json!({ "name": "Reader" })).expect_err("rejected");
        assert!(failure.has("email", ViolationCode::MissingField));
    }
}
