//! History entries and their identifiers

use chrono::{DateTime, Utc};
use csv2report_core::SummaryResult;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Opaque identifier of one retained history entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Mint a fresh unique id.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// One retained, immutable record of a past ingest
///
/// Created on successful ingest, never mutated, destroyed only by eviction.
/// Callers always receive clones; entry lifetime belongs to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: EntryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub row_count: u64,
    pub summary: SummaryResult,
}

/// Lookup failure: the id does not resolve to a retained entry
///
/// Covers both ids that never existed and ids whose entry was evicted; a
/// client-facing "not found" outcome, not a system fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Dataset not found: {id}")]
pub struct NotFoundError {
    pub id: EntryId,
}
