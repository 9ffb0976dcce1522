//! Store and configuration diagnostics behind `GET /test`.
//!
//! The report is always produced; every failure is folded into its strings.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use super::ports::StoreIntrospection;
use super::record_service::truncate_chars;

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DATABASE_NOT_INITIALISED: &str = "⚠️  Available but not initialized";
pub const DATABASE_WORKING: &str = "✅ Connected & Working";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";
pub const SET: &str = "✅ Set";
pub const NOT_SET: &str = "❌ Not Set";

/// Most collection names listed in a report.
pub const MAX_LISTED_COLLECTIONS: usize = 10;
/// Longest store error excerpt included in a report, in characters.
pub const ERROR_EXCERPT_MAX: usize = 50;

/// Which store settings were present at startup. Values are never kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigPresence {
    pub database_url: bool,
    pub database_name: bool,
}

/// Diagnostic snapshot returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Builds [`DiagnosticReport`]s from the optional store handle.
#[derive(Clone)]
pub struct DiagnosticsReporter {
    store: Option<Arc<dyn StoreIntrospection>>,
    presence: ConfigPresence,
}

impl DiagnosticsReporter {
    pub fn new(store: Option<Arc<dyn StoreIntrospection>>, presence: ConfigPresence) -> Self {
        Self { store, presence }
    }

    /// Produce the current report. Never fails.
    ///
    /// # Examples
    /// ```
    /// use portfolio_backend::domain::{ConfigPresence, DiagnosticsReporter};
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let report = DiagnosticsReporter::new(None, ConfigPresence::default())
    ///     .report()
    ///     .await;
    /// assert_eq!(report.connection_status, "Not Connected");
    /// assert_eq!(report.database_url, "❌ Not Set");
    /// # });
    /// ```
    pub async fn report(&self) -> DiagnosticReport {
        let (database, connection_status, collections) = match &self.store {
            None => (DATABASE_NOT_INITIALISED.to_owned(), NOT_CONNECTED, Vec::new()),
            Some(store) => match store.collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_LISTED_COLLECTIONS);
                    (DATABASE_WORKING.to_owned(), CONNECTED, names)
                }
                Err(err) => {
                    warn!(error = %err, "store introspection failed");
                    let excerpt = truncate_chars(&err.to_string(), ERROR_EXCERPT_MAX);
                    (
                        format!("⚠️  Connected but Error: {excerpt}"),
                        CONNECTED,
                        Vec::new(),
                    )
                }
            },
        };

        DiagnosticReport {
            backend: BACKEND_RUNNING.to_owned(),
            database,
            database_url: presence_label(self.presence.database_url).to_owned(),
            database_name: presence_label(self.presence.database_name).to_owned(),
            connection_status: connection_status.to_owned(),
            collections,
        }
    }
}

fn presence_label(present: bool) -> &'static str {
    if present { SET } else { NOT_SET }
}
