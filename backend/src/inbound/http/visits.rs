//! Page visit logging endpoints.
//!
//! ```text
//! POST /visit {"path":"/projects","referrer":"https://example.com/"}
//! GET /visit?limit=20
//! ```

use actix_web::{get, post, web};
use serde_json::Value;

use crate::domain::Collection;
use crate::inbound::http::ApiResult;
use crate::inbound::http::records::{self, ListQuery, SubmitResponse};
use crate::inbound::http::schemas::{ErrorSchema, PortfolioVisitSchema};
use crate::inbound::http::state::HttpState;

/// Record a page visit.
#[utoipa::path(
    post,
    path = "/visit",
    request_body = PortfolioVisitSchema,
    responses(
        (status = 200, description = "Visit stored", body = SubmitResponse),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "logVisit"
)]
#[post("/visit")]
pub async fn log_visit(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<SubmitResponse>> {
    records::submit(&state, Collection::PortfolioVisit, &payload).await
}

/// List recorded visits, oldest first.
#[utoipa::path(
    get,
    path = "/visit",
    params(ListQuery),
    responses(
        (status = 200, description = "Stored visits with `_id` and `created_at`", body = [Object]),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "listVisits"
)]
#[get("/visit")]
pub async fn list_visits(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<Vec<Value>>> {
    records::list(&state, Collection::PortfolioVisit, &query).await
}
