//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their structure and register under the domain type's
//! path via `#[schema(as = ...)]`.

#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa when generating OpenAPI"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The document store is unreachable or rejected the operation.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "request validation failed")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// For `invalid_request`: `{ "violations": [FieldViolation] }`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::FieldViolation`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldViolation)]
pub struct FieldViolationSchema {
    #[schema(example = "message")]
    field: String,
    /// One of `missing_field`, `invalid_type`, `too_short`, `too_long`,
    /// `malformed_email`.
    #[schema(example = "too_short")]
    code: String,
    #[schema(example = "message must be at least 10 characters")]
    message: String,
    /// Length bound crossed by `too_short` / `too_long`.
    #[schema(example = 10)]
    limit: Option<u64>,
}

/// OpenAPI schema for [`crate::domain::ContactMessage`] request bodies.
#[derive(ToSchema)]
#[schema(as = crate::domain::ContactMessage)]
pub struct ContactMessageSchema {
    /// 2 to 120 characters.
    #[schema(example = "Jo Doe")]
    name: String,
    #[schema(example = "jo@example.com")]
    email: String,
    /// At most 200 characters.
    subject: Option<String>,
    /// 10 to 5000 characters.
    #[schema(example = "Hello, I love your robots!")]
    message: String,
    #[schema(example = "web")]
    source: Option<String>,
}

/// OpenAPI schema for [`crate::domain::NewsletterSubscriber`] request bodies.
#[derive(ToSchema)]
#[schema(as = crate::domain::NewsletterSubscriber)]
pub struct NewsletterSubscriberSchema {
    #[schema(example = "reader@example.com")]
    email: String,
    /// At most 120 characters.
    name: Option<String>,
}

/// OpenAPI schema for [`crate::domain::PortfolioVisit`] request bodies.
#[derive(ToSchema)]
#[schema(as = crate::domain::PortfolioVisit)]
pub struct PortfolioVisitSchema {
    #[schema(example = "/projects")]
    path: String,
    user_agent: Option<String>,
    referrer: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Link`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Link)]
pub struct LinkSchema {
    #[schema(example = "GitHub")]
    label: String,
    #[schema(example = "https://github.com/")]
    href: String,
}

/// OpenAPI schema for [`crate::domain::Profile`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Profile)]
pub struct ProfileSchema {
    #[schema(example = "Mechatronics Student")]
    name: String,
    university: String,
    location: String,
    tagline: String,
    #[schema(example = "/avatar.png")]
    avatar: String,
    links: Vec<LinkSchema>,
}

/// OpenAPI schema for [`crate::domain::Skill`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Skill)]
pub struct SkillSchema {
    #[schema(example = "Control Systems")]
    name: String,
    #[schema(example = "Advanced")]
    level: String,
}

/// OpenAPI schema for [`crate::domain::ShowcaseProject`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ShowcaseProject)]
pub struct ShowcaseProjectSchema {
    title: String,
    tagline: String,
    description: String,
    tech: Vec<String>,
    highlights: Vec<String>,
    repo: Option<String>,
    demo: Option<String>,
    images: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::TimelineEntry`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TimelineEntry)]
pub struct TimelineEntrySchema {
    #[schema(example = "2025")]
    year: String,
    items: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::Banner`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Banner)]
pub struct BannerSchema {
    #[schema(example = "Mechatronics Student")]
    name: String,
    #[schema(example = "Mechatronics Portfolio API running")]
    message: String,
}

/// OpenAPI schema for [`crate::domain::DiagnosticReport`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DiagnosticReport)]
pub struct DiagnosticReportSchema {
    #[schema(example = "✅ Running")]
    backend: String,
    #[schema(example = "✅ Connected & Working")]
    database: String,
    #[schema(example = "✅ Set")]
    database_url: String,
    #[schema(example = "❌ Not Set")]
    database_name: String,
    #[schema(example = "Connected")]
    connection_status: String,
    /// At most ten collection names.
    collections: Vec<String>,
}
