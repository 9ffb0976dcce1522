//! Email address primitive.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Longest address accepted, per the SMTP path limit.
pub const EMAIL_MAX: usize = 254;
/// Longest local part (before `@`) accepted.
pub const EMAIL_LOCAL_MAX: usize = 64;

/// Reasons an email address is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailValidationError {
    /// No `@` separator, or nothing on one side of it.
    #[error("an email address must have an @-sign")]
    MissingAt,
    /// The address exceeds [`EMAIL_MAX`] characters.
    #[error("the email address is too long")]
    TooLong,
    /// The local part exceeds [`EMAIL_LOCAL_MAX`] characters or has bad characters.
    #[error("the part before the @-sign is not valid")]
    InvalidLocalPart,
    /// The domain is not a dotted sequence of hostname labels.
    #[error("the part after the @-sign is not valid")]
    InvalidDomain,
}

static LOCAL_PART_RE: OnceLock<Regex> = OnceLock::new();
static DOMAIN_RE: OnceLock<Regex> = OnceLock::new();

fn local_part_regex() -> &'static Regex {
    LOCAL_PART_RE.get_or_init(|| {
        // Dot-atom form over Unicode letters, marks and digits: no leading,
        // trailing or doubled dots.
        let atom = r"[\p{L}\p{M}\p{N}!#$%&'*+/=?^_`{|}~-]+";
        let pattern = format!(r"^{atom}(\.{atom})*$");
        Regex::new(&pattern)
            .unwrap_or_else(|error| panic!("email local part regex failed to compile: {error}"))
    })
}

fn domain_regex() -> &'static Regex {
    DOMAIN_RE.get_or_init(|| {
        // Internationalised labels are accepted as-is or in punycode. The
        // top-level label is alphabetic or an `xn--` A-label.
        let label = r"[\p{L}\p{N}]([\p{L}\p{M}\p{N}-]{0,61}[\p{L}\p{M}\p{N}])?";
        let tld = r"(\p{L}[\p{L}\p{M}]{1,62}|xn--[A-Za-z0-9-]{1,59})";
        let pattern = format!(r"^{label}(\.{label})*\.{tld}$");
        Regex::new(&pattern)
            .unwrap_or_else(|error| panic!("email domain regex failed to compile: {error}"))
    })
}

/// A syntactically valid email address with a lower-cased domain.
///
/// # Examples
/// ```
/// use portfolio_backend::domain::EmailAddress;
///
/// let email = EmailAddress::parse("Jo@Example.COM").expect("valid address");
/// assert_eq!(email.as_ref(), "Jo@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalise `raw`.
    ///
    /// # Errors
    /// Returns an [`EmailValidationError`] describing the first problem found.
    pub fn parse(raw: &str) -> Result<Self, EmailValidationError> {
        if raw.chars().count() > EMAIL_MAX {
            return Err(EmailValidationError::TooLong);
        }
        let Some((local, domain)) = raw.rsplit_once('@') else {
            return Err(EmailValidationError::MissingAt);
        };
        if local.is_empty() || domain.is_empty() {
            return Err(EmailValidationError::MissingAt);
        }
        if local.chars().count() > EMAIL_LOCAL_MAX || !local_part_regex().is_match(local) {
            return Err(EmailValidationError::InvalidLocalPart);
        }
        if !domain_regex().is_match(domain) {
            return Err(EmailValidationError::InvalidDomain);
        }
        Ok(Self(format!("{local}@{}", domain.to_lowercase())))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}
