// Environment-variable overrides (highest priority config source)

use crate::RuntimeConfig;
use anyhow::{anyhow, Result};

pub const ENV_PREFIX: &str = "CSV2REPORT_";

/// Abstraction over environment-variable lookups so tests can supply their
/// own source of overrides without touching the process environment.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Apply environment-variable overrides to the runtime config.
pub fn apply_env_overrides<E: EnvSource>(config: &mut RuntimeConfig, env: &E) -> Result<()> {
    if let Some(val) = get_env_usize(env, "MAX_HISTORY")? {
        config.history.max_entries = val;
    }

    if let Some(val) = get_env_usize(env, "MAX_PAYLOAD_BYTES")? {
        config.request.max_payload_bytes = val;
    }

    if let Some(level) = env.get(&prefixed("LOG_LEVEL")) {
        config.log.level = level;
    }

    Ok(())
}

fn prefixed(key: &str) -> String {
    format!("{ENV_PREFIX}{key}")
}

fn get_env_usize<E: EnvSource>(env: &E, key: &str) -> Result<Option<usize>> {
    let full_key = prefixed(key);
    match env.get(&full_key) {
        Some(raw) => {
            let parsed = raw
                .parse::<usize>()
                .map_err(|_| anyhow!("Invalid {} value: {}", full_key, raw))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeEnv(HashMap<String, String>);

    impl EnvSource for FakeEnv {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    fn env(pairs: &[(&str, &str)]) -> FakeEnv {
        FakeEnv(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = RuntimeConfig::default();
        let env = env(&[
            ("CSV2REPORT_MAX_HISTORY", "3"),
            ("CSV2REPORT_MAX_PAYLOAD_BYTES", "1024"),
            ("CSV2REPORT_LOG_LEVEL", "debug"),
        ]);

        apply_env_overrides(&mut config, &env).unwrap();
        assert_eq!(config.history.max_entries, 3);
        assert_eq!(config.request.max_payload_bytes, 1024);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_absent_variables_leave_defaults() {
        let mut config = RuntimeConfig::default();
        apply_env_overrides(&mut config, &env(&[])).unwrap();
        assert_eq!(config.history.max_entries, 5);
    }

    #[test]
    fn test_unparseable_numeric_override_is_an_error() {
        let mut config = RuntimeConfig::default();
        let env = env(&[("CSV2REPORT_MAX_HISTORY", "five")]);
        assert!(apply_env_overrides(&mut config, &env).is_err());
    }
}
