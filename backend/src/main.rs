//! Backend entry-point: reads settings, connects the optional document store,
//! and serves the portfolio API.

mod server;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use portfolio_backend::inbound::http::health::HealthState;
use portfolio_backend::settings::AppSettings;
#[cfg(feature = "metrics")]
use server::initialize_metrics;
use server::{ServerConfig, connect_store, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::from_env(&DefaultEnv::default()).map_err(std::io::Error::other)?;
    let store = connect_store(&settings).await;

    let config = ServerConfig::new((settings.host.clone(), settings.port))
        .with_presence(settings.presence())
        .with_store(store);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("portfolio")
            .endpoint("/metrics")
            .build()
    }));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(host = %settings.host, port = settings.port, "portfolio API listening");
    server.await
}
