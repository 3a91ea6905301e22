// csv2report-config - Unified runtime configuration
//
// Supports configuration from multiple sources:
// 1. Environment variables (highest priority, CSV2REPORT_* prefix)
// 2. Config file path from CSV2REPORT_CONFIG env var
// 3. Config file contents from CSV2REPORT_CONFIG_CONTENT env var
// 4. Default config file location (./csv2report.toml)
// 5. Built-in defaults (lowest priority)
//
// Configuration is read once at process start; nothing here is
// runtime-mutable.

use anyhow::Result;
use serde::{Deserialize, Serialize};

mod env_overrides;
mod sources;
mod validation;

pub use env_overrides::{apply_env_overrides, EnvSource, ENV_PREFIX};
pub use sources::{load_from_file_path, load_or_default, StdEnvSource};

/// Main runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub request: RequestConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl RuntimeConfig {
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

/// History retention configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Retention bound N: how many past ingests are kept.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_entries: 5 }
    }
}

/// Upload handling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    pub max_payload_bytes: usize,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 8 * 1024 * 1024,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.history.max_entries, 5);
        assert_eq!(config.request.max_payload_bytes, 8 * 1024 * 1024);
        assert_eq!(config.log.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: RuntimeConfig = toml::from_str(
            r#"
            [history]
            max_entries = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.history.max_entries, 10);
        assert_eq!(config.request.max_payload_bytes, 8 * 1024 * 1024);
    }
}
