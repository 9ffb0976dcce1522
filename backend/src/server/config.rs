//! HTTP server configuration object.

use std::sync::Arc;

use portfolio_backend::domain::{ConfigPresence, PortfolioContent};
use portfolio_backend::outbound::persistence::DieselDocumentRepository;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) content: Arc<PortfolioContent>,
    pub(crate) store: Option<DieselDocumentRepository>,
    pub(crate) presence: ConfigPresence,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Configuration serving the built-in content with no store.
    #[must_use]
    pub fn new(bind_addr: (String, u16)) -> Self {
        Self {
            bind_addr,
            content: Arc::new(PortfolioContent::default()),
            store: None,
            presence: ConfigPresence::default(),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Attach the document store adapter.
    #[must_use]
    pub fn with_store(mut self, store: Option<DieselDocumentRepository>) -> Self {
        self.store = store;
        self
    }

    /// Record which store settings were present, for diagnostics.
    #[must_use]
    pub fn with_presence(mut self, presence: ConfigPresence) -> Self {
        self.presence = presence;
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
