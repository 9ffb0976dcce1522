//! bb8 pool of async Diesel PostgreSQL connections.
//!
//! Connections open lazily. Checkout is bounded by
//! [`PoolConfig::connection_timeout`], so a store that disappears after
//! startup surfaces as [`PoolError::Checkout`] instead of a stalled request.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Pool construction or checkout failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

/// Sizing and timeout for [`DbPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_size: u32,
    pub connection_timeout: Duration,
}

impl Default for PoolConfig {
    /// Eight connections, five second checkout timeout.
    fn default() -> Self {
        Self {
            max_size: 8,
            connection_timeout: Duration::from_secs(5),
        }
    }
}

/// Shared handle to the connection pool. Cloning is cheap.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build a pool for `database_url`.
    ///
    /// # Errors
    /// Returns [`PoolError::Build`] when the pool cannot be constructed.
    pub async fn connect(database_url: &str, config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(None)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::Build {
                message: err.to_string(),
            })?;
        Ok(Self { inner })
    }

    /// Check out a connection.
    ///
    /// # Errors
    /// Returns [`PoolError::Checkout`] when none is available in time.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner.get().await.map_err(|err| PoolError::Checkout {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_config_is_small() {
        assert_eq!(
            PoolConfig::default(),
            PoolConfig {
                max_size: 8,
                connection_timeout: Duration::from_secs(5),
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn checkout_times_out_against_a_closed_port() {
        let config = PoolConfig {
            max_size: 1,
            connection_timeout: Duration::from_millis(200),
        };
        let pool = DbPool::connect("postgres://nobody@127.0.0.1:1/none", config)
            .await
            .expect("pool builds without connecting");

        let err = pool.get().await.err().expect("no server listens on port 1");
        assert!(matches!(err, PoolError::Checkout { .. }), "{err}");
    }
}
