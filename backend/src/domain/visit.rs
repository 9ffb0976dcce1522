//! Page visit log entries.

use serde::Serialize;
use serde_json::Value;

use super::validation::{FieldReader, ValidationFailure};

/// A page view reported by the portfolio frontend.
///
/// All fields are free-form; only `path` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioVisit {
    path: String,
    user_agent: Option<String>,
    referrer: Option<String>,
}

impl PortfolioVisit {
    /// Validate an untyped JSON payload.
    ///
    /// # Errors
    /// Returns a failure when `path` is missing or any field is not a string.
    pub fn from_json(payload: &Value) -> Result<Self, ValidationFailure> {
        let mut reader = FieldReader::new(payload)?;
        let path = reader.required_text("path", 0..=usize::MAX);
        let user_agent = reader.optional_text("user_agent", 0..=usize::MAX);
        let referrer = reader.optional_text("referrer", 0..=usize::MAX);

        let Some(path) = path else {
            return Err(reader.into_failure());
        };
        reader.finish()?;
        Ok(Self {
            path,
            user_agent,
            referrer,
        })
    }

    /// Visited path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reported browser user agent.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Reported referrer.
    #[must_use]
    pub fn referrer(&self) -> Option<&str> {
        self.referrer.as_deref()
    }
}
