//! Internal Diesel row structs for the `documents` table.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::documents;

/// Row struct for reading from the documents table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DocumentRow {
    pub id: String,
    pub collection: String,
    pub body: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for new documents. Identifier and timestamp are
/// assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = documents)]
pub(crate) struct NewDocumentRow<'a> {
    pub collection: &'a str,
    pub body: &'a serde_json::Value,
}
