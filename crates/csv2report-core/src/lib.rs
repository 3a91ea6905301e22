// csv2report-core - Platform-agnostic core pipeline
//
// This crate contains the PURE processing logic for turning equipment CSV
// bytes into a validated dataset, summary statistics, and normalized row
// records. No I/O, no shared state, deterministic for the same input.

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod normalize;
pub mod schema;
pub mod validate;

// Re-export commonly used types
pub use aggregate::{aggregate, SummaryResult};
pub use dataset::{CellValue, Dataset, RawRow};
pub use error::{SchemaError, ValidationError};
pub use normalize::normalize_rows;
pub use validate::validate_csv;

/// Result of processing one equipment CSV payload
///
/// Contains the computed summary statistics and the normalized row records,
/// ready for the history store and for boundary serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedCsv {
    pub summary: SummaryResult,
    pub records: Vec<RawRow>,
}

/// Validate, aggregate, and normalize one equipment CSV payload
///
/// This is the whole core pipeline: CSV bytes → summary + normalized rows.
/// No I/O, no side effects, deterministic for the same input.
///
/// # Arguments
/// * `csv_bytes` - Raw UTF-8 CSV bytes with a header row, comma-delimited
///
/// # Returns
/// * `Ok(ProcessedCsv)` - Summary statistics and normalized records
/// * `Err(ValidationError)` - Missing required columns or malformed CSV
///   structure; the whole ingest is rejected, no partial dataset survives
pub fn process_csv(csv_bytes: &[u8]) -> Result<ProcessedCsv, ValidationError> {
    let dataset = validate_csv(csv_bytes)?;
    let summary = aggregate(&dataset);
    let records = normalize_rows(dataset.into_rows());
    Ok(ProcessedCsv { summary, records })
}
