//! Shared plumbing for the persisted record endpoints.
//!
//! `contact`, `newsletter` and `visits` differ only in their collection; the
//! submit and list flows live here.

use actix_web::web;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Collection, DEFAULT_LIST_LIMIT, validate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validation_error;

/// Status reported by successful submissions.
pub const STATUS_OK: &str = "ok";

/// Response body for accepted submissions.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Store-assigned document identifier.
    #[schema(example = "65f1c0ffee0000000000beef")]
    pub id: String,
}

/// Query parameters accepted by the list endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Maximum number of documents to return (default 20).
    #[param(example = 20, minimum = 0)]
    pub limit: Option<u32>,
}

impl ListQuery {
    fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

pub(crate) async fn submit(
    state: &HttpState,
    collection: Collection,
    payload: &Value,
) -> ApiResult<web::Json<SubmitResponse>> {
    let record = validate(collection, payload).map_err(|failure| validation_error(&failure))?;
    let id = state.records.submit(&record).await?;
    Ok(web::Json(SubmitResponse {
        status: STATUS_OK.to_owned(),
        id: id.to_string(),
    }))
}

pub(crate) async fn list(
    state: &HttpState,
    collection: Collection,
    query: &ListQuery,
) -> ApiResult<web::Json<Vec<Value>>> {
    let documents = state
        .records
        .list(collection, query.effective_limit())
        .await?;
    Ok(web::Json(
        documents.into_iter().map(|document| document.into_json()).collect(),
    ))
}
