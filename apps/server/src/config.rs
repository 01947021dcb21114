//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

/// Till server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `0.0.0.0` or `127.0.0.1`
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Number of seed products generated at startup
    pub catalog_size: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            catalog_size: env::var("CATALOG_SIZE")
                .unwrap_or_else(|_| till_store::seed::DEFAULT_CATALOG_SIZE.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CATALOG_SIZE".to_string()))?,
        };

        Ok(config)
    }

    /// Bind address in `host:port` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_joins_host_and_port() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001,
            catalog_size: 1500,
        };

        assert_eq!(config.bind_addr(), "127.0.0.1:3001");
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ConfigError::InvalidValue("PORT".to_string());
        assert_eq!(err.to_string(), "Invalid value for PORT");
    }
}
