//! Store diagnostics endpoint.
//!
//! ```text
//! GET /test
//! ```

use actix_web::{get, web};

use crate::domain::DiagnosticReport;
use crate::inbound::http::schemas::DiagnosticReportSchema;
use crate::inbound::http::state::HttpState;

/// Report backend, store and configuration status. Always 200.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Diagnostic report", body = DiagnosticReportSchema)),
    tags = ["health"],
    operation_id = "diagnostics"
)]
#[get("/test")]
pub async fn diagnostics(state: web::Data<HttpState>) -> web::Json<DiagnosticReport> {
    web::Json(state.diagnostics.report().await)
}
