//! Persisted record kinds and their stored form.
//!
//! Each accepted payload becomes one [`PortfolioRecord`] variant, tagged with
//! the [`Collection`] it belongs to. Records stay typed until the storage
//! adapter serialises them with [`PortfolioRecord::to_document`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::validation::ValidationFailure;
use super::{ContactMessage, NewsletterSubscriber, PortfolioVisit};

/// Store collection a record is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Contact form messages.
    ContactMessage,
    /// Newsletter subscriptions.
    NewsletterSubscriber,
    /// Page visit log entries.
    PortfolioVisit,
}

impl Collection {
    /// Stable name of the collection in the store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContactMessage => "contactmessage",
            Self::NewsletterSubscriber => "newslettersubscriber",
            Self::PortfolioVisit => "portfoliovisit",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated record ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioRecord {
    Contact(ContactMessage),
    Subscriber(NewsletterSubscriber),
    Visit(PortfolioVisit),
}

impl PortfolioRecord {
    /// Collection the record belongs to.
    #[must_use]
    pub fn collection(&self) -> Collection {
        match self {
            Self::Contact(_) => Collection::ContactMessage,
            Self::Subscriber(_) => Collection::NewsletterSubscriber,
            Self::Visit(_) => Collection::PortfolioVisit,
        }
    }

    /// JSON document body written to the store.
    ///
    /// Optional fields are kept as explicit `null`s so every document in a
    /// collection has the same keys.
    ///
    /// # Errors
    /// Propagates the serialiser's error.
    pub fn to_document(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Contact(record) => serde_json::to_value(record),
            Self::Subscriber(record) => serde_json::to_value(record),
            Self::Visit(record) => serde_json::to_value(record),
        }
    }
}

impl From<ContactMessage> for PortfolioRecord {
    fn from(value: ContactMessage) -> Self {
        Self::Contact(value)
    }
}

impl From<NewsletterSubscriber> for PortfolioRecord {
    fn from(value: NewsletterSubscriber) -> Self {
        Self::Subscriber(value)
    }
}

impl From<PortfolioVisit> for PortfolioRecord {
    fn from(value: PortfolioVisit) -> Self {
        Self::Visit(value)
    }
}

/// Validate `payload` as a record of `collection`.
///
/// # Errors
/// Returns every violated field; storage is never touched.
///
/// # Examples
/// ```
/// use portfolio_backend::domain::{Collection, validate};
/// use serde_json::json;
///
/// let record = validate(Collection::PortfolioVisit, &json!({ "path": "/" }))
///     .expect("valid visit");
/// assert_eq!(record.collection(), Collection::PortfolioVisit);
/// ```
pub fn validate(
    collection: Collection,
    payload: &Value,
) -> Result<PortfolioRecord, ValidationFailure> {
    match collection {
        Collection::ContactMessage => ContactMessage::from_json(payload).map(Into::into),
        Collection::NewsletterSubscriber => {
            NewsletterSubscriber::from_json(payload).map(Into::into)
        }
        Collection::PortfolioVisit => PortfolioVisit::from_json(payload).map(Into::into),
    }
}

/// Store-assigned document identifier, rendered as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A document read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub collection: Collection,
    pub created_at: DateTime<Utc>,
    pub body: Value,
}

impl StoredDocument {
    /// Render as the listed JSON object: the stored body plus `_id` and
    /// `created_at`.
    ///
    /// Non-object bodies are wrapped under `body` rather than dropped.
    #[must_use]
    pub fn into_json(self) -> Value {
        let mut object = match self.body {
            Value::Object(object) => object,
            other => {
                let mut object = Map::new();
                object.insert("body".to_owned(), other);
                object
            }
        };
        object.insert("_id".to_owned(), Value::String(self.id.0));
        object.insert(
            "created_at".to_owned(),
            Value::String(self.created_at.to_rfc3339()),
        );
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViolationCode;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Collection::ContactMessage, "contactmessage")]
    #[case(Collection::NewsletterSubscriber, "newslettersubscriber")]
    #[case(Collection::PortfolioVisit, "portfoliovisit")]
    fn collection_names_are_stable(#[case] collection: Collection, #[case] name: &str) {
        assert_eq!(collection.as_str(), name);
        assert_eq!(collection.to_string(), name);
        assert_eq!(
            serde_json::to_value(collection).expect("serialises"),
            json!(name)
        );
    }

    #[rstest]
    fn validate_dispatches_on_collection() {
        let payload = json!({ "email": "reader@example.com" });

        let record = validate(Collection::NewsletterSubscriber, &payload).expect("valid");
        assert_eq!(record.collection(), Collection::NewsletterSubscriber);

        let failure = validate(Collection::ContactMessage, &payload).expect_err("rejected");
        assert!(failure.has("name", ViolationCode::MissingField));
        assert!(failure.has("message", ViolationCode::MissingField));
    }

    #[rstest]
    fn visit_document_keeps_null_optionals() {
        let record =
            validate(Collection::PortfolioVisit, &json!({ "path": "/about" })).expect("valid");
        assert_eq!(
            record.to_document().expect("visit serialises"),
            json!({ "path": "/about", "user_agent": null, "referrer": null })
        );
    }

    #[rstest]
    fn stored_document_renders_id_and_timestamp() {
        let created_at = Utc
            .with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let document = StoredDocument {
            id: DocumentId::new("0123456789abcdef01234567"),
            collection: Collection::PortfolioVisit,
            created_at,
            body: json!({ "path": "/" }),
        };

        assert_eq!(
            document.into_json(),
            json!({
                "path": "/",
                "_id": "0123456789abcdef01234567",
                "created_at": "2025-03-01T12:00:00+00:00",
            })
        );
    }

    #[rstest]
    fn non_object_body_is_wrapped() {
        let document = StoredDocument {
            id: DocumentId::new("abc"),
            collection: Collection::PortfolioVisit,
            created_at: Utc::now(),
            body: json!("raw"),
        };
        assert_eq!(document.into_json()["body"], json!("raw"));
    }
}
