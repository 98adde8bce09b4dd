//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crate::outbound::persistence::DbPool;
use crate::settings::{AppSettings, SettingsError};

/// Builder-style configuration for creating the HTTP server.
///
/// Without a database pool the server runs on the in-memory adapters.
#[derive(Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) dev_tokens_enabled: bool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            dev_tokens_enabled: false,
        }
    }

    /// Derive the listener address and token mode from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the configured bind address is invalid.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(settings.bind_addr()?).with_dev_tokens(settings.dev_tokens_enabled))
    }

    /// Attach a database connection pool; ports then use the Diesel adapters.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Accept the fixed development tokens when running in memory.
    #[must_use]
    pub fn with_dev_tokens(mut self, enabled: bool) -> Self {
        self.dev_tokens_enabled = enabled;
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_to_in_memory_without_dev_tokens() {
        let addr: SocketAddr = "127.0.0.1:0".parse().expect("address");
        let config = ServerConfig::new(addr);

        assert_eq!(config.bind_addr(), addr);
        assert!(config.db_pool.is_none());
        assert!(!config.dev_tokens_enabled);
    }

    #[rstest]
    fn from_settings_carries_dev_token_flag() {
        let settings = AppSettings {
            bind_addr: Some("127.0.0.1:8181".to_owned()),
            database_url: None,
            db_max_connections: None,
            db_connection_timeout_secs: None,
            run_migrations: false,
            dev_tokens_enabled: true,
        };

        let config = ServerConfig::from_settings(&settings).expect("valid settings");

        assert_eq!(config.bind_addr().port(), 8181);
        assert!(config.dev_tokens_enabled);
    }
}
