//! Bootstrap configuration loading
//!
//! Resolution priority, highest first:
//! 1. Command-line argument
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const ENV_CONFIG: &str = "BOOKING_CONFIG";
/// Environment variable overriding the database path
pub const ENV_DATABASE: &str = "BOOKING_DATABASE";
/// Environment variable overriding the bind address
pub const ENV_BIND: &str = "BOOKING_BIND";
/// Environment variable overriding the HTTP port
pub const ENV_PORT: &str = "BOOKING_PORT";

const DEFAULT_BIND: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

/// Contents of the TOML config file; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    #[serde(default)]
    pub bind_address: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr only if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Values supplied on the command line (highest priority)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub database_path: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Fully resolved startup configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub database_path: PathBuf,
    pub bind_address: String,
    pub port: u16,
    pub logging: LoggingConfig,
}

impl BootstrapConfig {
    /// Resolve configuration from CLI, environment, TOML file and defaults
    pub fn resolve(cli: &CliOverrides) -> Result<Self> {
        let config_path = cli
            .config_file
            .clone()
            .or_else(|| std::env::var(ENV_CONFIG).ok().map(PathBuf::from))
            .or_else(default_config_file);

        let toml_config = match config_path {
            Some(path) => load_toml_config(&path)?,
            None => TomlConfig::default(),
        };

        Self::merge(cli, toml_config)
    }

    fn merge(cli: &CliOverrides, file: TomlConfig) -> Result<Self> {
        let database_path = cli
            .database_path
            .clone()
            .or_else(|| std::env::var(ENV_DATABASE).ok().map(PathBuf::from))
            .or(file.database_path)
            .unwrap_or_else(default_database_path);

        let bind_address = cli
            .bind_address
            .clone()
            .or_else(|| std::env::var(ENV_BIND).ok())
            .or(file.bind_address)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let port = match cli.port {
            Some(port) => port,
            None => match std::env::var(ENV_PORT) {
                Ok(raw) => raw.parse::<u16>().map_err(|e| {
                    Error::Config(format!("{} must be a port number: {}", ENV_PORT, e))
                })?,
                Err(_) => file.port.unwrap_or(DEFAULT_PORT),
            },
        };

        let mut logging = file.logging;
        if let Some(level) = &cli.log_level {
            logging.level = level.clone();
        }

        Ok(Self {
            database_path,
            bind_address,
            port,
            logging,
        })
    }

    /// `host:port` string for the listener
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Load a TOML config file.
///
/// A missing file falls back to defaults with a warning; a malformed file is
/// a configuration error.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!("Config file {} not found, using defaults", path.display());
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str::<TomlConfig>(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

    info!("Loaded config file {}", path.display());
    Ok(config)
}

/// `<config_dir>/booking/config.toml`, when it exists
fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("booking").join("config.toml"))
        .filter(|p| p.exists())
}

/// OS-dependent default database location
fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("booking"))
        .unwrap_or_else(|| PathBuf::from("./booking_data"))
        .join("booking.db")
}
