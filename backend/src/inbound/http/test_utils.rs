//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{RecordRepository, StoreIntrospection, UnconfiguredRecordRepository};
use crate::domain::{ConfigPresence, PortfolioContent};
use crate::inbound::http::state::HttpState;

/// State for a service started without `DATABASE_URL`.
pub fn unconfigured_state() -> HttpState {
    HttpState::from_ports(
        Arc::new(PortfolioContent::default()),
        Arc::new(UnconfiguredRecordRepository),
        None,
        ConfigPresence::default(),
    )
}

/// State backed by the given repository and introspection doubles.
pub fn state_with(
    repository: impl RecordRepository + 'static,
    store: Option<Arc<dyn StoreIntrospection>>,
) -> HttpState {
    HttpState::from_ports(
        Arc::new(PortfolioContent::default()),
        Arc::new(repository),
        store,
        ConfigPresence {
            database_url: true,
            database_name: false,
        },
    )
}
