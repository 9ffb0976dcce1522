//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_backend::outbound::persistence::{
//!     DbPool, DieselDocumentRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("postgres://localhost/portfolio").await?;
//! let pool = DbPool::connect("postgres://localhost/portfolio", PoolConfig::default()).await?;
//! let repo = DieselDocumentRepository::new(pool);
//! ```

mod diesel_document_repository;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_document_repository::DieselDocumentRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
