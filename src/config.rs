//! TOML-based application configuration.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::dispatch::engine::DEFAULT_CO2_T_PER_MWH;

/// Top-level application configuration parsed from TOML.
///
/// Every section is optional and falls back to its defaults. Load with
/// [`AppConfig::from_toml_file`] or start from [`AppConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Engine parameters.
    #[serde(default)]
    pub dispatch: DispatchConfig,
    /// Log filtering.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// HTTP adapter binding.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Engine parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// CO2 emitted per MWh generated by a gas-fired plant (t/MWh).
    pub co2_t_per_mwh: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            co2_t_per_mwh: DEFAULT_CO2_T_PER_MWH,
        }
    }
}

/// Log filtering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "powerplant_dispatch=info".to_string(),
        }
    }
}

/// HTTP adapter binding.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8888,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"dispatch.co2_t_per_mwh"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let co2 = self.dispatch.co2_t_per_mwh;
        if !co2.is_finite() || co2 < 0.0 {
            errors.push(ConfigError {
                field: "dispatch.co2_t_per_mwh".into(),
                message: "must be a finite number >= 0".into(),
            });
        }

        if self.logging.filter.trim().is_empty() {
            errors.push(ConfigError {
                field: "logging.filter".into(),
                message: "must not be empty".into(),
            });
        }

        if self.server.host.trim().is_empty() {
            errors.push(ConfigError {
                field: "server.host".into(),
                message: "must not be empty".into(),
            });
        }

        errors
    }
}
