use std::collections::BTreeMap;

use super::filter::FilterSelection;
use super::model::StationTable;

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------
// Pure projections of the loaded table, recomputed on every render pass.
// None of them mutate or cache anything.

/// Stations per nominal power, with power truncated toward zero.
///
/// Always reflects the full table; the map filter does not apply. The
/// `BTreeMap` keeps the series ordered by power for the bar chart.
pub fn power_histogram(table: &StationTable) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for rec in &table.records {
        *counts.entry(rec.power_kw.trunc() as i64).or_insert(0) += 1;
    }
    counts
}

/// `(latitude, longitude)` pairs of the stations passing the current filter,
/// in source-table order.
pub fn filtered_geo_subset(table: &StationTable, selection: &FilterSelection) -> Vec<(f64, f64)> {
    table
        .records
        .iter()
        .filter(|rec| selection.matches(rec))
        .map(|rec| (rec.latitude, rec.longitude))
        .collect()
}

/// Stations per operator name, over the full (unfiltered) table.
pub fn operator_counts(table: &StationTable) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for rec in &table.records {
        *counts.entry(rec.operator.clone()).or_insert(0) += 1;
    }
    counts
}
