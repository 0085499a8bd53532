//! Service configuration read from the environment.

use std::env;

use accounts_db::config::StoreConfig;

/// Port used when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Reads `PORT` and the `ACCOUNTS_*` store variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            port,
            store: StoreConfig::from_env()?,
        })
    }
}
