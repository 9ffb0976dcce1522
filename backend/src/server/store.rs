//! Startup connection to the document store.
//!
//! Every failure is logged and yields `None`, so the service still starts and
//! serves content without a store.

use portfolio_backend::outbound::persistence::{
    DbPool, DieselDocumentRepository, PoolConfig, run_migrations,
};
use portfolio_backend::settings::AppSettings;
use tracing::{info, warn};

/// Migrate the configured store and open a pool against it.
pub async fn connect_store(settings: &AppSettings) -> Option<DieselDocumentRepository> {
    let url = match settings.store_url() {
        Ok(Some(url)) => url,
        Ok(None) => {
            info!("DATABASE_URL not set; running without a document store");
            return None;
        }
        Err(error) => {
            warn!(%error, "invalid store settings; running without a document store");
            return None;
        }
    };

    if let Err(error) = run_migrations(&url).await {
        warn!(%error, "document store unreachable; running without it");
        return None;
    }

    match DbPool::connect(&url, PoolConfig::default()).await {
        Ok(pool) => {
            info!("document store ready");
            Some(DieselDocumentRepository::new(pool))
        }
        Err(error) => {
            warn!(%error, "failed to build store pool; running without it");
            None
        }
    }
}
