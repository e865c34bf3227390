//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::cookie::{Key, SameSite};

use crate::domain::ports::LoginService;
use crate::inbound::http::session_config::SessionSettings;
use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) ttl_minutes: i64,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) login: Arc<dyn LoginService>,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration from resolved session settings.
    #[must_use]
    pub fn new(
        session: SessionSettings,
        bind_addr: SocketAddr,
        login: Arc<dyn LoginService>,
    ) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
            ttl_minutes,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            ttl_minutes,
            bind_addr,
            login,
            db_pool: None,
        }
    }

    /// Attach a database connection pool.
    ///
    /// Without one the catalogue is served from memory and lost on restart.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
