//! Domain primitives, services and ports.
//!
//! Purpose: hold the portfolio's behaviour independent of HTTP and storage.
//! Inbound adapters call [`RecordService`], [`DiagnosticsReporter`] and
//! [`PortfolioContent`]; outbound adapters implement the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic error envelope.
//! - PortfolioRecord / Collection / validate: the validation layer.
//! - RecordService: persisted record writes and listings.
//! - DiagnosticsReporter: never-failing store status report.

pub mod contact;
pub mod content;
pub mod diagnostics;
pub mod email;
pub mod error;
pub mod newsletter;
pub mod ports;
pub mod record_service;
pub mod records;
pub mod trace_id;
pub mod validation;
pub mod visit;

pub use self::contact::ContactMessage;
pub use self::content::{
    Banner, Link, PortfolioContent, Profile, ShowcaseProject, Skill, TimelineEntry,
};
pub use self::diagnostics::{ConfigPresence, DiagnosticReport, DiagnosticsReporter};
pub use self::email::{EmailAddress, EmailValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::newsletter::NewsletterSubscriber;
pub use self::record_service::{DEFAULT_LIST_LIMIT, RecordService};
pub use self::records::{
    Collection, DocumentId, PortfolioRecord, StoredDocument, validate,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{BODY_FIELD, FieldViolation, ValidationFailure, ViolationCode};
pub use self::visit::PortfolioVisit;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use portfolio_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::service_unavailable("store offline"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
