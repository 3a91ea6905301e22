//! Fixed column contract for equipment parameter CSVs
//!
//! The schema is a constant of the system: it is not configurable and does
//! not evolve. Header cells match required columns after trimming, ignoring
//! ASCII case; output rows always carry the canonical names.

/// Columns every uploaded CSV must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Equipment Name",
    "Type",
    "Flowrate",
    "Pressure",
    "Temperature",
];

/// Columns averaged by the aggregator.
pub const NUMERIC_COLUMNS: [&str; 3] = ["Flowrate", "Pressure", "Temperature"];

/// Column counted into the category distribution.
pub const CATEGORY_COLUMN: &str = "Type";

/// Canonical name for a raw header cell, if it matches the contract.
pub fn canonical_column(header: &str) -> Option<&'static str> {
    let trimmed = header.trim();
    REQUIRED_COLUMNS
        .iter()
        .find(|name| name.eq_ignore_ascii_case(trimmed))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_column_trims_and_ignores_case() {
        assert_eq!(canonical_column("  Flowrate "), Some("Flowrate"));
        assert_eq!(canonical_column("FLOWRATE"), Some("Flowrate"));
        assert_eq!(canonical_column("equipment name"), Some("Equipment Name"));
        assert_eq!(canonical_column("Throughput"), None);
    }

    #[test]
    fn test_numeric_columns_are_required() {
        for name in NUMERIC_COLUMNS {
            assert!(REQUIRED_COLUMNS.contains(&name));
        }
        assert!(REQUIRED_COLUMNS.contains(&CATEGORY_COLUMN));
    }
}
