//! Summary statistics over a validated dataset

use crate::dataset::{CellValue, Dataset};
use crate::schema::{CATEGORY_COLUMN, NUMERIC_COLUMNS};
use serde::Serialize;
use std::collections::BTreeMap;

/// The computed statistics for one dataset
///
/// Immutable once computed. `averages` always carries exactly the numeric
/// columns; an undefined mean (no numeric values in the column) is `None`,
/// never `0.0`. When every row has a category value, the distribution counts
/// sum to `total_count`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub total_count: u64,
    pub averages: BTreeMap<String, Option<f64>>,
    pub category_distribution: BTreeMap<String, u64>,
}

/// Round to 2 decimal places, ties away from zero (`f64::round` semantics).
///
/// The one rounding policy for the whole pipeline; averages and normalized
/// cells must agree at `.xx5` boundaries.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute count, per-column means, and the category distribution
///
/// Cells without a numeric view (text, blanks) are excluded from the mean of
/// their column rather than failing the aggregation. Category cells render
/// through their text form; missing categories are skipped.
pub fn aggregate(dataset: &Dataset) -> SummaryResult {
    let mut averages = BTreeMap::new();
    for column in NUMERIC_COLUMNS {
        let mut sum = 0.0;
        let mut samples = 0u64;
        for row in dataset.rows() {
            if let Some(value) = row.get(column).and_then(CellValue::as_number) {
                sum += value;
                samples += 1;
            }
        }
        let mean = (samples > 0).then(|| round2(sum / samples as f64));
        averages.insert(column.to_string(), mean);
    }

    let mut category_distribution: BTreeMap<String, u64> = BTreeMap::new();
    for row in dataset.rows() {
        let category = match row.get(CATEGORY_COLUMN) {
            Some(CellValue::Text(text)) => text.clone(),
            Some(CellValue::Number(n)) => n.to_string(),
            _ => continue,
        };
        *category_distribution.entry(category).or_insert(0) += 1;
    }

    SummaryResult {
        total_count: dataset.row_count() as u64,
        averages,
        category_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_csv;

    fn dataset(csv: &str) -> Dataset {
        validate_csv(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_round2_ties_away_from_zero() {
        // 2.125 is exactly representable, so the tie is real
        assert_eq!(round2(2.125), 2.13);
        assert_eq!(round2(-2.125), -2.13);
        assert_eq!(round2(9.041), 9.04);
        assert_eq!(round2(25.0), 25.0);
    }

    #[test]
    fn test_three_row_scenario() {
        let ds = dataset(
            "Equipment Name,Type,Flowrate,Pressure,Temperature\n\
             Pump1,Pump,10.123,2.0,25.0\n\
             Tank1,Tank,5.0,1.555,20.0\n\
             Pump2,Pump,12.0,2.5,30.0\n",
        );

        let summary = aggregate(&ds);
        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.averages["Flowrate"], Some(9.04));
        assert_eq!(summary.averages["Pressure"], Some(2.02));
        assert_eq!(summary.averages["Temperature"], Some(25.0));
        assert_eq!(summary.category_distribution["Pump"], 2);
        assert_eq!(summary.category_distribution["Tank"], 1);
    }

    #[test]
    fn test_malformed_numeric_cells_excluded_from_mean() {
        let ds = dataset(
            "Equipment Name,Type,Flowrate,Pressure,Temperature\n\
             Pump1,Pump,10.0,n/a,25.0\n\
             Tank1,Tank,,1.0,\n",
        );

        let summary = aggregate(&ds);
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.averages["Flowrate"], Some(10.0));
        assert_eq!(summary.averages["Pressure"], Some(1.0));
        assert_eq!(summary.averages["Temperature"], Some(25.0));
    }

    #[test]
    fn test_column_with_no_numeric_values_is_undefined() {
        let ds = dataset(
            "Equipment Name,Type,Flowrate,Pressure,Temperature\n\
             Pump1,Pump,broken,1.0,25.0\n",
        );

        let summary = aggregate(&ds);
        assert_eq!(summary.averages["Flowrate"], None);
    }

    #[test]
    fn test_empty_dataset() {
        let ds = dataset("Equipment Name,Type,Flowrate,Pressure,Temperature\n");

        let summary = aggregate(&ds);
        assert_eq!(summary.total_count, 0);
        assert!(summary.averages.values().all(Option::is_none));
        assert!(summary.category_distribution.is_empty());
    }

    #[test]
    fn test_averages_within_column_bounds() {
        let ds = dataset(
            "Equipment Name,Type,Flowrate,Pressure,Temperature\n\
             A,Pump,1.0,10.0,100.0\n\
             B,Pump,3.0,30.0,300.0\n\
             C,Pump,2.0,20.0,200.0\n",
        );

        let summary = aggregate(&ds);
        let flow = summary.averages["Flowrate"].unwrap();
        assert!((1.0..=3.0).contains(&flow));
        let pressure = summary.averages["Pressure"].unwrap();
        assert!((10.0..=30.0).contains(&pressure));
    }

    #[test]
    fn test_distribution_counts_sum_to_total_when_fully_populated() {
        let ds = dataset(
            "Equipment Name,Type,Flowrate,Pressure,Temperature\n\
             A,Pump,1,1,1\n\
             B,Tank,1,1,1\n\
             C,Valve,1,1,1\n\
             D,Pump,1,1,1\n",
        );

        let summary = aggregate(&ds);
        let counted: u64 = summary.category_distribution.values().sum();
        assert_eq!(counted, summary.total_count);
    }

    #[test]
    fn test_summary_serializes_undefined_average_as_null() {
        let ds = dataset("Equipment Name,Type,Flowrate,Pressure,Temperature\n");
        let json = serde_json::to_value(aggregate(&ds)).unwrap();
        assert!(json["averages"]["Flowrate"].is_null());
        assert_eq!(json["total_count"], 0);
    }
}
