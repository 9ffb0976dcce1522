//! Port for read-only store diagnostics.
use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while introspecting the store.
    pub enum StoreIntrospectionError {
        /// The store could not be reached.
        Connection => "store connection failed: {message}",
        /// The introspection query failed.
        Query => "store query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreIntrospection: Send + Sync {
    /// Names of the collections currently holding documents, sorted.
    async fn collection_names(&self) -> Result<Vec<String>, StoreIntrospectionError>;
}

/// Fixture reporting a fixed set of collections.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct FixtureStoreIntrospection {
    pub collections: Vec<String>,
}

#[cfg(test)]
#[async_trait]
impl StoreIntrospection for FixtureStoreIntrospection {
    async fn collection_names(&self) -> Result<Vec<String>, StoreIntrospectionError> {
        Ok(self.collections.clone())
    }
}
