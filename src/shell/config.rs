//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `ACTIVITIES_HOST` | `0.0.0.0` |
//! | `ACTIVITIES_PORT` | `8000` |
//!
//! A `.env` file in the working directory is loaded first when present.

use std::net::SocketAddr;

pub const HOST_VAR: &str = "ACTIVITIES_HOST";
pub const PORT_VAR: &str = "ACTIVITIES_PORT";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("invalid listen address {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (silently ignore if not found)
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = lookup(HOST_VAR).unwrap_or(defaults.host);
        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value,
                })?,
            None => defaults.port,
        };
        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}
