//! Request validation glue for the inbound HTTP adapter.
//!
//! Turns [`ValidationFailure`]s and actix extractor rejections into
//! `invalid_request` errors carrying a `violations` list.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{BODY_FIELD, Error, ValidationFailure, ViolationCode};

/// Top-level message of every validation error response.
pub const VALIDATION_MESSAGE: &str = "request validation failed";

/// Map a domain validation failure onto the error envelope.
pub(crate) fn validation_error(failure: &ValidationFailure) -> Error {
    Error::invalid_request(VALIDATION_MESSAGE).with_details(json!({
        "violations": failure.violations(),
    }))
}

fn single_violation(field: &str, code: ViolationCode, message: String) -> Error {
    Error::invalid_request(VALIDATION_MESSAGE).with_details(json!({
        "violations": [{
            "field": field,
            "code": code.as_str(),
            "message": message,
        }],
    }))
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    let message = match &err {
        JsonPayloadError::ContentType => "request body must be application/json".to_owned(),
        JsonPayloadError::Overflow { limit }
        | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            format!("request body exceeds {limit} bytes")
        }
        other => format!("request body is not valid JSON: {other}"),
    };
    single_violation(BODY_FIELD, ViolationCode::InvalidType, message).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected query string");
    single_violation("query", ViolationCode::InvalidType, err.to_string()).into()
}

/// JSON extractor configuration returning the error envelope on bad bodies.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

/// Query extractor configuration returning the error envelope on bad
/// parameters.
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}
