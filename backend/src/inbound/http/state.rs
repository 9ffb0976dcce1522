//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{RecordRepository, StoreIntrospection};
use crate::domain::{ConfigPresence, DiagnosticsReporter, PortfolioContent, RecordService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub content: Arc<PortfolioContent>,
    pub records: RecordService,
    pub diagnostics: DiagnosticsReporter,
}

impl HttpState {
    /// Construct state from explicit service values.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use portfolio_backend::domain::ports::UnconfiguredRecordRepository;
    /// use portfolio_backend::domain::{
    ///     ConfigPresence, DiagnosticsReporter, PortfolioContent, RecordService,
    /// };
    /// use portfolio_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(PortfolioContent::default()),
    ///     RecordService::new(Arc::new(UnconfiguredRecordRepository)),
    ///     DiagnosticsReporter::new(None, ConfigPresence::default()),
    /// );
    /// assert_eq!(state.content.skills().len(), 8);
    /// ```
    pub fn new(
        content: Arc<PortfolioContent>,
        records: RecordService,
        diagnostics: DiagnosticsReporter,
    ) -> Self {
        Self {
            content,
            records,
            diagnostics,
        }
    }

    /// Wire state from port implementations.
    ///
    /// `store` is `None` when no store is configured or it could not be
    /// reached at startup.
    pub fn from_ports(
        content: Arc<PortfolioContent>,
        repository: Arc<dyn RecordRepository>,
        store: Option<Arc<dyn StoreIntrospection>>,
        presence: ConfigPresence,
    ) -> Self {
        Self::new(
            content,
            RecordService::new(repository),
            DiagnosticsReporter::new(store, presence),
        )
    }
}
