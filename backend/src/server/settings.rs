//! Server settings loaded via OrthoConfig from `REVERENCE_*` variables,
//! configuration files and CLI flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use zeroize::Zeroizing;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Missing or inconsistent server settings.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("REVERENCE_ADMIN_PASSWORD must be set")]
    MissingAdminPassword,
    #[error("REVERENCE_ADMIN_USERNAME must not be blank")]
    BlankAdminUsername,
}

/// Process-level configuration for the catalogue server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REVERENCE")]
pub struct ServerSettings {
    /// Address to bind; defaults to all interfaces.
    pub host: Option<IpAddr>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// PostgreSQL URL. Without one the catalogue lives in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Operator username for `POST /admin/login`.
    pub admin_username: Option<String>,
    /// Operator password for `POST /admin/login`.
    pub admin_password: Option<String>,
}

impl ServerSettings {
    /// Socket address assembled from host and port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Operator credentials, defaulting the username to `admin`.
    ///
    /// # Errors
    ///
    /// Fails when no password is configured or the username is blank.
    pub fn admin_credentials(&self) -> Result<(String, Zeroizing<String>), SettingsError> {
        let username = self
            .admin_username
            .as_deref()
            .unwrap_or(DEFAULT_ADMIN_USERNAME)
            .trim();
        if username.is_empty() {
            return Err(SettingsError::BlankAdminUsername);
        }
        let password = self
            .admin_password
            .clone()
            .filter(|password| !password.is_empty())
            .ok_or(SettingsError::MissingAdminPassword)?;
        Ok((username.to_owned(), Zeroizing::new(password)))
    }
}
