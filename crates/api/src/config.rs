//! Service Configuration
//!
//! Defaults, then an optional `coolant-diag.toml`, then `COOLANT_DIAG__*`
//! environment variables (`COOLANT_DIAG__BIND_ADDR`,
//! `COOLANT_DIAG__VALIDATION__MAX_TEXT_LEN`, ...).

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use symptom_intake::ValidationConfig;

/// Default configuration file name, extension resolved by the loader
pub const DEFAULT_CONFIG_FILE: &str = "coolant-diag";

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Expose Prometheus metrics on `/metrics`
    pub metrics_enabled: bool,
    /// Form validation rules
    pub validation: ValidationConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_json: false,
            metrics_enabled: true,
            validation: ValidationConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from an optional file and the environment
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = path.unwrap_or(DEFAULT_CONFIG_FILE);

        Config::builder()
            .add_source(File::with_name(file).required(path.is_some()))
            .add_source(
                Environment::with_prefix("COOLANT_DIAG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config = ServiceConfig::load(None).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert!(config.metrics_enabled);
        assert_eq!(config.validation.max_text_len, 4000);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(ServiceConfig::load(Some("/nonexistent/coolant-diag-test")).is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = std::env::temp_dir().join(format!("coolant-diag-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("service.toml");
        std::fs::write(&path, "bind_addr = \"127.0.0.1:9000\"\n[validation]\nmax_text_len = 500\n")
            .unwrap();

        let config = ServiceConfig::load(path.to_str()).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.validation.max_text_len, 500);
        assert!(config.validation.require_vehicle);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
