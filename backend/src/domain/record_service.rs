//! Persisted record service.
//!
//! Writes validated records through the [`RecordRepository`] port and reads
//! them back. Store failures surface as `service_unavailable` errors and are
//! never retried.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::{RecordRepository, RecordRepositoryError};
use super::{Collection, DocumentId, Error, PortfolioRecord, StoredDocument};

/// Default number of documents returned by a listing.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

/// Longest store message forwarded to clients, in characters.
pub const STORE_MESSAGE_MAX: usize = 120;

/// Application service for the contact, newsletter and visit collections.
#[derive(Clone)]
pub struct RecordService {
    repository: Arc<dyn RecordRepository>,
}

impl RecordService {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// Store `record` in its collection.
    ///
    /// # Errors
    /// Returns a `service_unavailable` error when the store rejects the write.
    pub async fn submit(&self, record: &PortfolioRecord) -> Result<DocumentId, Error> {
        let collection = record.collection();
        let id = self
            .repository
            .insert(record)
            .await
            .map_err(|err| storage_unavailable(collection, &err))?;
        debug!(%collection, %id, "record stored");
        Ok(id)
    }

    /// Fetch at most `limit` documents from `collection`.
    ///
    /// A zero limit returns an empty list without touching the store.
    ///
    /// # Errors
    /// Returns a `service_unavailable` error when the store cannot be read.
    pub async fn list(
        &self,
        collection: Collection,
        limit: u32,
    ) -> Result<Vec<StoredDocument>, Error> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut documents = self
            .repository
            .list(collection, limit)
            .await
            .map_err(|err| storage_unavailable(collection, &err))?;
        documents.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(documents)
    }
}

fn storage_unavailable(collection: Collection, err: &RecordRepositoryError) -> Error {
    warn!(%collection, error = %err, "record store operation failed");
    Error::service_unavailable(truncate_chars(&err.to_string(), STORE_MESSAGE_MAX))
}

/// First `max` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockRecordRepository;
    use crate::domain::validate;
    use chrono::Utc;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn visit() -> PortfolioRecord {
        validate(Collection::PortfolioVisit, &json!({ "path": "/projects" })).expect("valid")
    }

    fn stored(id: &str) -> StoredDocument {
        StoredDocument {
            id: DocumentId::new(id),
            collection: Collection::PortfolioVisit,
            created_at: Utc::now(),
            body: json!({ "path": "/" }),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn submit_returns_store_assigned_id(visit: PortfolioRecord) {
        let mut repo = MockRecordRepository::new();
        let expected = visit.clone();
        repo.expect_insert()
            .withf(move |record| *record == expected)
            .times(1)
            .return_once(|_| Ok(DocumentId::new("65f1c0ffee0000000000beef")));

        let service = RecordService::new(Arc::new(repo));
        let id = service.submit(&visit).await.expect("stored");
        assert_eq!(id.as_str(), "65f1c0ffee0000000000beef");
    }

    #[rstest]
    #[tokio::test]
    async fn submit_maps_store_failures_to_service_unavailable(visit: PortfolioRecord) {
        let mut repo = MockRecordRepository::new();
        repo.expect_insert()
            .return_once(|_| Err(RecordRepositoryError::query("x".repeat(300))));

        let service = RecordService::new(Arc::new(repo));
        let err = service.submit(&visit).await.expect_err("store failed");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(err.message().chars().count(), STORE_MESSAGE_MAX);
        assert!(err.message().starts_with("record store query failed: xxx"));
    }

    #[rstest]
    #[tokio::test]
    async fn list_passes_limit_to_the_store() {
        let mut repo = MockRecordRepository::new();
        repo.expect_list()
            .with(eq(Collection::PortfolioVisit), eq(2_u32))
            .times(1)
            .return_once(|_, _| Ok(vec![stored("a"), stored("b")]));

        let service = RecordService::new(Arc::new(repo));
        let documents = service
            .list(Collection::PortfolioVisit, 2)
            .await
            .expect("listed");
        assert_eq!(documents.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn list_never_exceeds_limit_even_if_the_store_does() {
        let mut repo = MockRecordRepository::new();
        repo.expect_list()
            .return_once(|_, _| Ok(vec![stored("a"), stored("b"), stored("c")]));

        let service = RecordService::new(Arc::new(repo));
        let documents = service
            .list(Collection::PortfolioVisit, 1)
            .await
            .expect("listed");
        let ids: Vec<_> = documents.iter().map(|document| document.id.as_str()).collect();
        assert_eq!(ids, ["a"]);
    }

    #[rstest]
    #[tokio::test]
    async fn zero_limit_skips_the_store() {
        let mut repo = MockRecordRepository::new();
        repo.expect_list().never();

        let service = RecordService::new(Arc::new(repo));
        let documents = service
            .list(Collection::ContactMessage, 0)
            .await
            .expect("listed");
        assert!(documents.is_empty());
    }

    #[rstest]
    #[case("short", 10, "short")]
    #[case("ééééé", 3, "ééé")]
    #[case("", 5, "")]
    fn truncation_counts_characters(
        #[case] text: &str,
        #[case] max: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(truncate_chars(text, max), expected);
    }
}
