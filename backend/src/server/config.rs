//! HTTP server configuration object.

use std::net::SocketAddr;

use drivent::outbound::persistence::DbPool;

/// Everything `create_server` needs besides the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) jwt_secret: String,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, jwt_secret: impl Into<String>) -> Self {
        Self {
            bind_addr,
            db_pool,
            jwt_secret: jwt_secret.into(),
        }
    }
}
