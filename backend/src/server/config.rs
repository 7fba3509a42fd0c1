//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use product_service::domain::ports::ReviewSource;
use product_service::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) review_source: Arc<dyn ReviewSource>,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration with in-memory product storage.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, review_source: Arc<dyn ReviewSource>) -> Self {
        Self {
            bind_addr,
            review_source,
            db_pool: None,
        }
    }

    /// Store products in PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
