//! Server settings read from a `.env` file and the process environment.
//!
//! The process environment wins over `.env`, the same precedence `dotenvy::dotenv` uses.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value ({0})")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// `RUST_LOG` style filter, e.g. `info` or `justkv=debug`.
    pub log_filter: String,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Reads `KEY=value` pairs from a `.env` file without touching the process environment.
pub fn read_dotenv(path: &Path) -> Result<HashMap<String, String>, dotenvy::Error> {
    dotenvy::from_path_iter(path)?.collect()
}

impl Settings {
    pub fn from_sources<F>(file: &HashMap<String, String>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).or_else(|| file.get(key).cloned());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Settings {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn listen_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
