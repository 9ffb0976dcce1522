//! OpenAPI documentation for the portfolio API.
//!
//! [`ApiDoc`] registers every HTTP handler and the schema wrappers from
//! [`crate::inbound::http::schemas`]. Swagger UI serves it in debug builds.

use crate::inbound::http::records::SubmitResponse;
use crate::inbound::http::schemas::{
    BannerSchema, ContactMessageSchema, DiagnosticReportSchema, ErrorCodeSchema, ErrorSchema,
    FieldViolationSchema, LinkSchema, NewsletterSubscriberSchema, PortfolioVisitSchema,
    ProfileSchema, ShowcaseProjectSchema, SkillSchema, TimelineEntrySchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mechatronics Portfolio API",
        version = "1.0.0",
        description = "Portfolio content, contact and newsletter submissions, and visit logging."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::content::banner,
        crate::inbound::http::content::get_profile,
        crate::inbound::http::content::get_skills,
        crate::inbound::http::content::get_projects,
        crate::inbound::http::content::get_timeline,
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::contact::list_contacts,
        crate::inbound::http::newsletter::subscribe,
        crate::inbound::http::newsletter::list_subscribers,
        crate::inbound::http::visits::log_visit,
        crate::inbound::http::visits::list_visits,
        crate::inbound::http::diagnostics::diagnostics,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        FieldViolationSchema,
        SubmitResponse,
        ContactMessageSchema,
        NewsletterSubscriberSchema,
        PortfolioVisitSchema,
        LinkSchema,
        ProfileSchema,
        SkillSchema,
        ShowcaseProjectSchema,
        TimelineEntrySchema,
        BannerSchema,
        DiagnosticReportSchema,
    )),
    tags(
        (name = "content", description = "Static portfolio content"),
        (name = "records", description = "Submitted and logged records"),
        (name = "health", description = "Probes and store diagnostics")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const CONTACT_SCHEMA_NAME: &str = "crate.domain.ContactMessage";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn document_carries_title_and_version() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Mechatronics Portfolio API");
        assert_eq!(doc.info.version, "1.0.0");
    }

    #[rstest]
    #[case(ERROR_SCHEMA_NAME, "code")]
    #[case(ERROR_SCHEMA_NAME, "message")]
    #[case(CONTACT_SCHEMA_NAME, "email")]
    #[case(CONTACT_SCHEMA_NAME, "subject")]
    fn schemas_have_expected_fields(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        assert_object_schema_has_field(schema, field);
    }

    #[rstest]
    #[case("/")]
    #[case("/profile")]
    #[case("/skills")]
    #[case("/projects")]
    #[case("/timeline")]
    #[case("/contact")]
    #[case("/subscribe")]
    #[case("/visit")]
    #[case("/test")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_endpoint_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn record_paths_document_both_methods() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/contact").expect("contact path");
        assert!(item.get.is_some());
        assert!(item.post.is_some());
    }
}
