//! Cell normalization for stable output representation

use crate::aggregate::round2;
use crate::dataset::{CellValue, RawRow};

/// Round every finite numeric cell to 2 decimal places
///
/// Text and missing cells pass through unchanged. Pure and order-preserving;
/// uses the same rounding policy as the aggregator.
pub fn normalize_rows(rows: Vec<RawRow>) -> Vec<RawRow> {
    rows.into_iter()
        .map(|row| {
            row.map_cells(|cell| match cell {
                CellValue::Number(n) if n.is_finite() => CellValue::Number(round2(n)),
                other => other,
            })
        })
        .collect()
}
