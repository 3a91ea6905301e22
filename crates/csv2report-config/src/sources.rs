// Configuration source loading for native targets.
//
// Priority order:
// 1. Environment variables (CSV2REPORT_* prefix)
// 2. Config file path from CSV2REPORT_CONFIG
// 3. Inline config content from CSV2REPORT_CONFIG_CONTENT
// 4. Default config file (./csv2report.toml)
// 5. Built-in defaults

use crate::env_overrides::{apply_env_overrides, EnvSource};
use crate::RuntimeConfig;
use anyhow::{Context, Result};
use std::env;
use std::path::Path;

/// `EnvSource` backed by the process environment.
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Load configuration with graceful fallback to defaults.
///
/// Tries the standard config file locations, falls back to built-in
/// defaults if none exist, then applies environment overrides and
/// validates.
pub fn load_or_default() -> Result<RuntimeConfig> {
    let mut config = load_from_file()?.unwrap_or_default();
    apply_env_overrides(&mut config, &StdEnvSource)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a specific file path (for a CLI --config flag).
///
/// Unlike `load_or_default`, a missing or unparseable file is an error.
/// Environment overrides still apply on top.
pub fn load_from_file_path(path: impl AsRef<Path>) -> Result<RuntimeConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let mut config: RuntimeConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    apply_env_overrides(&mut config, &StdEnvSource)?;
    config.validate()?;
    Ok(config)
}

fn load_from_file() -> Result<Option<RuntimeConfig>> {
    if let Ok(path) = env::var("CSV2REPORT_CONFIG") {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: RuntimeConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        return Ok(Some(config));
    }

    if let Ok(content) = env::var("CSV2REPORT_CONFIG_CONTENT") {
        let config: RuntimeConfig = toml::from_str(&content)
            .context("Failed to parse inline config from CSV2REPORT_CONFIG_CONTENT")?;
        return Ok(Some(config));
    }

    let default_path = "./csv2report.toml";
    if Path::new(default_path).exists() {
        let content = std::fs::read_to_string(default_path)
            .with_context(|| format!("Failed to read config file: {}", default_path))?;
        let config: RuntimeConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", default_path))?;
        return Ok(Some(config));
    }

    Ok(None)
}
