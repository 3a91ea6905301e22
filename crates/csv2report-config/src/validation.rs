// Configuration validation
//
// Validates that values are sensible before the process commits to them

use crate::RuntimeConfig;
use anyhow::{bail, Result};
use tracing::warn;

pub fn validate_config(config: &RuntimeConfig) -> Result<()> {
    if config.history.max_entries == 0 {
        bail!("history.max_entries must be greater than 0");
    }

    // History entries are kept in memory, summaries included
    if config.history.max_entries > 1_000 {
        warn!(
            max_entries = config.history.max_entries,
            "history.max_entries is very large; every retained summary stays in memory"
        );
    }

    if config.request.max_payload_bytes == 0 {
        bail!("request.max_payload_bytes must be greater than 0");
    }

    if config.request.max_payload_bytes > 100 * 1024 * 1024 {
        warn!(
            max_payload_bytes = config.request.max_payload_bytes,
            "request.max_payload_bytes is very large; uploads are buffered whole"
        );
    }

    Ok(())
}
