//! Error types for the ingestion pipeline

use thiserror::Error;

/// Required columns absent from an uploaded header
///
/// Carries the missing names in canonical required-column order; the message
/// is surfaced verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required columns: {}", .missing.join(", "))]
pub struct SchemaError {
    pub missing: Vec<String>,
}

/// Why an ingest was rejected before any dataset was produced
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The header is structurally fine but the column contract is not met.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Structurally malformed CSV (unparseable rows); aborts the whole
    /// ingest, no partial dataset is kept.
    #[error("Failed to parse CSV: {0}")]
    Parse(#[from] csv::Error),
}
