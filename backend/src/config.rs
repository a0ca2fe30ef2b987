//! Server configuration file and environment support.
//!
//! Settings come from a TOML file (see `scheduler.toml`) and may then be
//! overridden by the `HOST`, `PORT` and `VALIDATION_MODE` environment
//! variables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

use crate::models::ValidationMode;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
}

/// Bind address settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Schedule validation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationSettings {
    #[serde(default)]
    pub mode: ValidationMode,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

const DEFAULT_SEARCH_PATHS: [&str; 2] = ["scheduler.toml", "backend/scheduler.toml"];

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the first standard location that exists.
    ///
    /// Searches `scheduler.toml` then `backend/scheduler.toml`. Returns the
    /// defaults when neither exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        Self::from_first_existing(DEFAULT_SEARCH_PATHS)
    }

    /// Load the first of `paths` that exists, or the defaults if none does.
    pub fn from_first_existing<I, P>(paths: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            if path.as_ref().exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::default())
    }

    /// Default-location file plus environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_default_location()?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Override settings from `HOST`, `PORT` and `VALIDATION_MODE`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?;
        }

        if let Ok(mode) = std::env::var("VALIDATION_MODE") {
            self.validation.mode = mode
                .parse()
                .map_err(|message| ConfigError::InvalidValue {
                    key: "VALIDATION_MODE".to_string(),
                    message,
                })?;
        }

        Ok(())
    }

    /// The socket address to bind, resolving host names such as `localhost`.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: "server.host".to_string(),
            message,
        };

        (self.server.host.as_str(), self.server.port)
            .to_socket_addrs()
            .map_err(|e| invalid(format!("cannot resolve '{}': {}", self.server.host, e)))?
            .next()
            .ok_or_else(|| invalid(format!("'{}' resolved to no address", self.server.host)))
    }
}
