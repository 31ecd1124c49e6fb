//! Environment-based server configuration.

use crate::server::error::config::ConfigError;

/// Port used when `PORT` is not set
pub static DEFAULT_PORT: u16 = 3000;
/// Address used when `BIND_ADDRESS` is not set
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
/// SQLite database file used when `DATABASE_URL` is not set, created if absent
pub static DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db?mode=rwc";

/// Runtime configuration for the stock room server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface the listener binds to, from `BIND_ADDRESS`
    pub bind_address: String,
    /// Listener port, from `PORT`
    pub port: u16,
    /// SeaORM connection URL, from `DATABASE_URL`
    pub database_url: String,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup, falling back to defaults
    /// for any variable that is not set.
    ///
    /// # Returns
    /// - `Ok(Config)` - All provided values were valid
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is not a valid port number
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        })
    }

    /// Socket address the HTTP listener binds to
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
