//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Submitted portfolio records, one row per document.
    ///
    /// `collection` names the record kind; `body` holds the validated fields.
    documents (id) {
        /// Store-assigned 24 character hex identifier.
        #[max_length = 24]
        id -> Varchar,
        collection -> Text,
        body -> Jsonb,
        created_at -> Timestamptz,
    }
}
