//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod record_repository;
mod store_introspection;

#[cfg(test)]
pub use record_repository::MockRecordRepository;
pub use record_repository::{
    RecordRepository, RecordRepositoryError, STORE_NOT_CONFIGURED, UnconfiguredRecordRepository,
};
pub use store_introspection::{StoreIntrospection, StoreIntrospectionError};
#[cfg(test)]
pub use store_introspection::{FixtureStoreIntrospection, MockStoreIntrospection};
