//! HTTP inbound adapter exposing REST endpoints.

pub mod contact;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod health;
pub mod newsletter;
pub mod records;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;
pub mod visits;

pub use error::ApiResult;
