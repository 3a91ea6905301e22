//! Tagged cell values and validated row records

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// One scalar cell of a tabular record
///
/// Uploaded CSVs mix strings, numbers, and blanks freely within a column, so
/// every cell carries an explicit tag instead of relying on per-column typing.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    /// Classify one raw CSV field.
    ///
    /// Empty or whitespace-only fields are `Missing`. Fields that parse as a
    /// finite float are `Number`; non-finite sentinels ("NaN", "inf") are
    /// treated as `Missing` so they never reach arithmetic. Everything else
    /// is `Text`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            Ok(_) => CellValue::Missing,
            Err(_) => CellValue::Text(trimmed.to_string()),
        }
    }

    /// Numeric view of the cell, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Missing => serializer.serialize_none(),
        }
    }
}

/// One record: column name → cell value
///
/// Rows produced by validation carry exactly the required columns under
/// their canonical names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    cells: BTreeMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Rebuild the row by mapping every cell through `f`, keeping columns.
    pub fn map_cells(self, f: impl Fn(CellValue) -> CellValue) -> Self {
        Self {
            cells: self
                .cells
                .into_iter()
                .map(|(column, value)| (column, f(value)))
                .collect(),
        }
    }
}

impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// A validated, schema-conformant ordered sequence of rows
///
/// Constructed only by the validator; immutable afterwards. Every row
/// exposes exactly the required column set.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<RawRow>,
}

impl Dataset {
    pub(crate) fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn into_rows(self) -> Vec<RawRow> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classifies_cells() {
        assert_eq!(CellValue::parse("Pump1"), CellValue::Text("Pump1".into()));
        assert_eq!(CellValue::parse("10.5"), CellValue::Number(10.5));
        assert_eq!(CellValue::parse(" 2 "), CellValue::Number(2.0));
        assert_eq!(CellValue::parse(""), CellValue::Missing);
        assert_eq!(CellValue::parse("   "), CellValue::Missing);
    }

    #[test]
    fn test_parse_rejects_non_finite_numbers() {
        assert_eq!(CellValue::parse("NaN"), CellValue::Missing);
        assert_eq!(CellValue::parse("inf"), CellValue::Missing);
        assert_eq!(CellValue::parse("-inf"), CellValue::Missing);
    }

    #[test]
    fn test_row_serializes_as_json_object() {
        let mut row = RawRow::new();
        row.insert("Equipment Name", CellValue::Text("Pump1".into()));
        row.insert("Flowrate", CellValue::Number(10.12));
        row.insert("Pressure", CellValue::Missing);

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Equipment Name"], "Pump1");
        assert_eq!(json["Flowrate"], 10.12);
        assert!(json["Pressure"].is_null());
    }
}
