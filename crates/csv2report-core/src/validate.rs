//! Schema validation: raw CSV bytes → validated `Dataset`

use crate::dataset::{CellValue, Dataset, RawRow};
use crate::error::{SchemaError, ValidationError};
use crate::schema::{canonical_column, REQUIRED_COLUMNS};

/// Validate an uploaded CSV against the required column set
///
/// Header names are trimmed and matched case-insensitively. Columns outside
/// the contract are dropped; row order is preserved. A header-only CSV is a
/// valid empty dataset.
///
/// # Errors
/// * `ValidationError::Schema` if any required column is absent, listing the
///   missing names in canonical order
/// * `ValidationError::Parse` if the CSV structure itself is malformed
pub fn validate_csv(csv_bytes: &[u8]) -> Result<Dataset, ValidationError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(csv_bytes);

    // Map each required column to the index of its first header occurrence.
    let headers = reader.headers()?.clone();
    let mut column_index: Vec<(&'static str, usize)> = Vec::with_capacity(REQUIRED_COLUMNS.len());
    for (index, header) in headers.iter().enumerate() {
        if let Some(canonical) = canonical_column(header) {
            if !column_index.iter().any(|(name, _)| *name == canonical) {
                column_index.push((canonical, index));
            }
        }
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| !column_index.iter().any(|(found, _)| found == *name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError { missing }.into());
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (name, index) in &column_index {
            let cell = record.get(*index).map_or(CellValue::Missing, CellValue::parse);
            row.insert(*name, cell);
        }
        rows.push(row);
    }

    Ok(Dataset::new(rows))
}
