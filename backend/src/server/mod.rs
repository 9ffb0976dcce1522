//! Server construction and middleware wiring.

mod config;
mod store;

pub use config::ServerConfig;
pub use store::connect_store;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use portfolio_backend::Trace;
#[cfg(debug_assertions)]
use portfolio_backend::doc::ApiDoc;
use portfolio_backend::domain::ports::{
    RecordRepository, StoreIntrospection, UnconfiguredRecordRepository,
};
use portfolio_backend::inbound::http::contact::{list_contacts, submit_contact};
use portfolio_backend::inbound::http::content::{
    banner, get_profile, get_projects, get_skills, get_timeline,
};
use portfolio_backend::inbound::http::diagnostics::diagnostics;
use portfolio_backend::inbound::http::health::{HealthState, live, ready};
use portfolio_backend::inbound::http::newsletter::{list_subscribers, subscribe};
use portfolio_backend::inbound::http::state::HttpState;
use portfolio_backend::inbound::http::validation::{json_config, query_config};
use portfolio_backend::inbound::http::visits::{list_visits, log_visit};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build handler state from the configured store, falling back to the
/// unconfigured repository when there is none.
fn build_http_state(config: &ServerConfig) -> HttpState {
    let (repository, store): (Arc<dyn RecordRepository>, Option<Arc<dyn StoreIntrospection>>) =
        match &config.store {
            Some(adapter) => {
                let adapter = Arc::new(adapter.clone());
                let repository: Arc<dyn RecordRepository> = adapter.clone();
                let store: Arc<dyn StoreIntrospection> = adapter;
                (repository, Some(store))
            }
            None => (Arc::new(UnconfiguredRecordRepository), None),
        };
    HttpState::from_ports(config.content.clone(), repository, store, config.presence)
}

pub(crate) fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(banner)
        .service(get_profile)
        .service(get_skills)
        .service(get_projects)
        .service(get_timeline)
        .service(submit_contact)
        .service(list_contacts)
        .service(subscribe)
        .service(list_subscribers)
        .service(log_visit)
        .service(list_visits)
        .service(diagnostics)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Build Prometheus middleware, logging and discarding failures.
#[cfg(feature = "metrics")]
pub fn initialize_metrics<F, E>(build: F) -> Option<actix_web_prom::PrometheusMetrics>
where
    F: FnOnce() -> Result<actix_web_prom::PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match build() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            tracing::warn!(%error, "failed to initialise Prometheus metrics; continuing without");
            None
        }
    }
}

/// Construct an Actix HTTP server and mark it ready.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let server_health_state = health_state.clone();

    #[cfg(feature = "metrics")]
    if let Some(metrics) = config.prometheus {
        let server = HttpServer::new(move || {
            build_app(server_health_state.clone(), http_state.clone()).wrap(metrics.clone())
        })
        .bind(config.bind_addr)?
        .run();
        health_state.mark_ready();
        return Ok(server);
    }

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
