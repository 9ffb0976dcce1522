//! Contact form endpoints.
//!
//! ```text
//! POST /contact {"name":"Jo Doe","email":"jo@example.com","message":"Hello, I love your robots!"}
//! GET /contact?limit=20
//! ```

use actix_web::{get, post, web};
use serde_json::Value;

use crate::domain::Collection;
use crate::inbound::http::ApiResult;
use crate::inbound::http::records::{self, ListQuery, SubmitResponse};
use crate::inbound::http::schemas::{ContactMessageSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Store a contact form message.
///
/// Every violated field is reported in `details.violations`.
#[utoipa::path(
    post,
    path = "/contact",
    request_body = ContactMessageSchema,
    responses(
        (status = 200, description = "Message stored", body = SubmitResponse),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "submitContact"
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<SubmitResponse>> {
    records::submit(&state, Collection::ContactMessage, &payload).await
}

/// List stored contact messages, oldest first.
#[utoipa::path(
    get,
    path = "/contact",
    params(ListQuery),
    responses(
        (status = 200, description = "Stored messages with `_id` and `created_at`", body = [Object]),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "listContacts"
)]
#[get("/contact")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<Vec<Value>>> {
    records::list(&state, Collection::ContactMessage, &query).await
}
