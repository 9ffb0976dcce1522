//! PostgreSQL-backed document adapter.
//!
//! Implements [`RecordRepository`] and [`StoreIntrospection`] over the single
//! `documents` table. Each record kind is a `collection` value; bodies are
//! stored as JSONB exactly as the domain renders them.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{
    RecordRepository, RecordRepositoryError, StoreIntrospection, StoreIntrospectionError,
};
use crate::domain::{Collection, DocumentId, PortfolioRecord, StoredDocument};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{DocumentRow, NewDocumentRow};
use super::pool::DbPool;
use super::schema::documents;

/// Diesel implementation of the document ports.
#[derive(Clone)]
pub struct DieselDocumentRepository {
    pool: DbPool,
}

impl DieselDocumentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn record_error(error: diesel::result::Error) -> RecordRepositoryError {
    map_diesel_error(
        error,
        RecordRepositoryError::query,
        RecordRepositoryError::connection,
    )
}

fn introspection_error(error: diesel::result::Error) -> StoreIntrospectionError {
    map_diesel_error(
        error,
        StoreIntrospectionError::query,
        StoreIntrospectionError::connection,
    )
}

/// Convert a row read from `collection` into a domain document.
fn row_to_document(row: DocumentRow, collection: Collection) -> StoredDocument {
    if row.collection != collection.as_str() {
        warn!(
            id = %row.id,
            stored = %row.collection,
            requested = %collection,
            "document collection mismatch"
        );
    }
    StoredDocument {
        id: DocumentId::new(row.id),
        collection,
        created_at: row.created_at,
        body: row.body,
    }
}

#[async_trait]
impl RecordRepository for DieselDocumentRepository {
    async fn insert(&self, record: &PortfolioRecord) -> Result<DocumentId, RecordRepositoryError> {
        let body = record.to_document().map_err(|err| {
            RecordRepositoryError::query(format!("record could not be serialised: {err}"))
        })?;
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, RecordRepositoryError::connection))?;

        let row = NewDocumentRow {
            collection: record.collection().as_str(),
            body: &body,
        };

        let id: String = diesel::insert_into(documents::table)
            .values(&row)
            .returning(documents::id)
            .get_result(&mut conn)
            .await
            .map_err(record_error)?;

        Ok(DocumentId::new(id))
    }

    async fn list(
        &self,
        collection: Collection,
        limit: u32,
    ) -> Result<Vec<StoredDocument>, RecordRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, RecordRepositoryError::connection))?;

        let rows: Vec<DocumentRow> = documents::table
            .filter(documents::collection.eq(collection.as_str()))
            .order((documents::created_at.asc(), documents::id.asc()))
            .limit(i64::from(limit))
            .select(DocumentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(record_error)?;

        Ok(rows
            .into_iter()
            .map(|row| row_to_document(row, collection))
            .collect())
    }
}

#[async_trait]
impl StoreIntrospection for DieselDocumentRepository {
    async fn collection_names(&self) -> Result<Vec<String>, StoreIntrospectionError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, StoreIntrospectionError::connection))?;

        documents::table
            .select(documents::collection)
            .distinct()
            .order(documents::collection.asc())
            .load::<String>(&mut conn)
            .await
            .map_err(introspection_error)
    }
}
