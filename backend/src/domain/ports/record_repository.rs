//! Port abstraction for document store adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Collection, DocumentId, PortfolioRecord, StoredDocument};

use super::define_port_error;

define_port_error! {
    /// Errors raised by record repository adapters.
    pub enum RecordRepositoryError {
        /// The store could not be reached or is not configured.
        Connection => "record store connection failed: {message}",
        /// The insert or query failed during execution.
        Query => "record store query failed: {message}",
    }
}

/// Append-only access to the persisted record collections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Insert `record` into its collection and return the store-assigned id.
    async fn insert(&self, record: &PortfolioRecord) -> Result<DocumentId, RecordRepositoryError>;

    /// Fetch at most `limit` documents from `collection`, oldest first.
    async fn list(
        &self,
        collection: Collection,
        limit: u32,
    ) -> Result<Vec<StoredDocument>, RecordRepositoryError>;
}

/// Repository used when no store is configured. Every call fails with
/// [`RecordRepositoryError::Connection`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredRecordRepository;

/// Message reported by [`UnconfiguredRecordRepository`].
pub const STORE_NOT_CONFIGURED: &str = "database not configured";

#[async_trait]
impl RecordRepository for UnconfiguredRecordRepository {
    async fn insert(
        &self,
        _record: &PortfolioRecord,
    ) -> Result<DocumentId, RecordRepositoryError> {
        Err(RecordRepositoryError::connection(STORE_NOT_CONFIGURED))
    }

    async fn list(
        &self,
        _collection: Collection,
        _limit: u32,
    ) -> Result<Vec<StoredDocument>, RecordRepositoryError> {
        Err(RecordRepositoryError::connection(STORE_NOT_CONFIGURED))
    }
}
