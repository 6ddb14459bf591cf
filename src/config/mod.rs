//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `LOOKALIKE_*` environment
//! variables.

mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::DEFAULT_TOP_K;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `LOOKALIKE_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Path of the artifact bundle (encoder state + corpus + vectors).
    /// Default: `./.data/artifacts.json`.
    pub artifact_path: PathBuf,

    /// Optional corpus file (one domain per line) used to build and persist
    /// the bundle when the artifact file does not exist yet.
    pub corpus_path: Option<PathBuf>,

    /// Candidates retrieved per query. Default: `3`.
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            artifact_path: PathBuf::from("./.data/artifacts.json"),
            corpus_path: None,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "LOOKALIKE_PORT";
    const ENV_BIND_ADDR: &'static str = "LOOKALIKE_BIND_ADDR";
    const ENV_ARTIFACT_PATH: &'static str = "LOOKALIKE_ARTIFACT_PATH";
    const ENV_CORPUS_PATH: &'static str = "LOOKALIKE_CORPUS_PATH";
    const ENV_TOP_K: &'static str = "LOOKALIKE_TOP_K";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let artifact_path =
            Self::parse_path_from_env(Self::ENV_ARTIFACT_PATH, defaults.artifact_path);
        let corpus_path = Self::parse_optional_path_from_env(Self::ENV_CORPUS_PATH);
        let top_k = Self::parse_top_k_from_env(defaults.top_k)?;

        Ok(Self {
            port,
            bind_addr,
            artifact_path,
            corpus_path,
            top_k,
        })
    }

    /// Validates basic invariants (does not create files).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(ConfigError::InvalidTopK {
                value: self.top_k.to_string(),
            });
        }

        if let Some(ref path) = self.corpus_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_top_k_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_TOP_K) {
            Ok(value) => {
                let top_k: usize = value.parse().map_err(|_| ConfigError::InvalidTopK {
                    value: value.clone(),
                })?;

                if top_k == 0 {
                    return Err(ConfigError::InvalidTopK { value });
                }

                Ok(top_k)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
