//! Configuration for the jsondoc server.
//!
//! Settings come from an optional TOML file. Every key has a default, so a partial
//! file (or none at all) is valid. The `PORT` environment variable overrides the port
//! of `server.http_addr`.
//!
//! ```toml
//! [server]
//! http_addr = "0.0.0.0:8080"
//!
//! [storage]
//! initial_capacity = 1024
//!
//! [logging]
//! filter = "info,tower_http=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

/// Environment variable that overrides the listening port.
pub const PORT_ENV: &str = "PORT";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid TOML for [`Config`].
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// An environment override held an unusable value.
    #[error("invalid value {value:?} for {key}")]
    InvalidOverride { key: &'static str, value: String },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// Storage configuration
    pub storage: StorageConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP server bind address
    pub http_addr: SocketAddr,
}

/// Storage configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Number of documents the table is pre-sized for
    pub initial_capacity: usize,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Replaces the port of the bind address, keeping its IP.
    pub fn set_port(&mut self, port: u16) {
        self.http_addr.set_port(port);
    }
}

impl Config {
    /// Applies environment overrides using `lookup` to read variables.
    ///
    /// An unset or empty `PORT` leaves the configured port untouched.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PORT_ENV).filter(|value| !value.is_empty()) {
            let port = value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidOverride {
                    key: PORT_ENV,
                    value,
                })?;
            self.server.set_port(port);
        }

        Ok(())
    }
}

/// Parse configuration from a TOML string
pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration from file
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_listen_on_8080() {
        let config = Config::default();

        assert_eq!(config.server.http_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.storage.initial_capacity, 0);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse_config("[storage]\ninitial_capacity = 64\n").unwrap();

        assert_eq!(config.storage.initial_capacity, 64);
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn full_file_is_parsed() {
        let config = parse_config(
            r#"
            [server]
            http_addr = "127.0.0.1:3000"

            [logging]
            filter = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.http_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = parse_config("[server]\nhttp_addr = 12").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nhttp_addr = \"127.0.0.1:9000\"").unwrap();

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.server.http_addr.port(), 9000);
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_config(dir.path().join("missing.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn port_override_keeps_ip() {
        let mut config = parse_config("[server]\nhttp_addr = \"127.0.0.1:3000\"").unwrap();

        config
            .apply_env_overrides(|key| (key == PORT_ENV).then(|| "4000".to_string()))
            .unwrap();

        assert_eq!(config.server.http_addr, SocketAddr::from(([127, 0, 0, 1], 4000)));
    }

    #[test]
    fn empty_port_is_ignored() {
        let mut config = Config::default();

        config.apply_env_overrides(|_| Some(String::new())).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let mut config = Config::default();

        let err = config
            .apply_env_overrides(|_| Some("http".to_string()))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidOverride { key: PORT_ENV, .. }));
    }
}
