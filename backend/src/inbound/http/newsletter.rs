//! Newsletter subscription endpoints.
//!
//! ```text
//! POST /subscribe {"email":"reader@example.com","name":"Reader"}
//! GET /subscribe?limit=20
//! ```

use actix_web::{get, post, web};
use serde_json::Value;

use crate::domain::Collection;
use crate::inbound::http::ApiResult;
use crate::inbound::http::records::{self, ListQuery, SubmitResponse};
use crate::inbound::http::schemas::{ErrorSchema, NewsletterSubscriberSchema};
use crate::inbound::http::state::HttpState;

/// Store a newsletter subscription.
#[utoipa::path(
    post,
    path = "/subscribe",
    request_body = NewsletterSubscriberSchema,
    responses(
        (status = 200, description = "Subscription stored", body = SubmitResponse),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "subscribe"
)]
#[post("/subscribe")]
pub async fn subscribe(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<SubmitResponse>> {
    records::submit(&state, Collection::NewsletterSubscriber, &payload).await
}

/// List stored subscriptions, oldest first.
#[utoipa::path(
    get,
    path = "/subscribe",
    params(ListQuery),
    responses(
        (status = 200, description = "Stored subscriptions with `_id` and `created_at`", body = [Object]),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "listSubscribers"
)]
#[get("/subscribe")]
pub async fn list_subscribers(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<Vec<Value>>> {
    records::list(&state, Collection::NewsletterSubscriber, &query).await
}
