use std::collections::BTreeMap;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong between the URL and a usable table.
///
/// The UI substitutes an empty table and shows the message; none of these
/// abort the process.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Transport-level failure (DNS, TLS, timeout, non-2xx status).
    #[error("network error: {0}")]
    Http(String),

    /// The response body is not structurally valid CSV.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent after canonical renaming.
    #[error("missing expected column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// StationRecord – one row of the source feed
// ---------------------------------------------------------------------------

/// A single charging station (one CSV row), with the four columns the views
/// depend on parsed into typed fields. Every other source column is kept
/// verbatim in `extra` for raw-data display.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    /// Rated charging power in kW.
    pub power_kw: f64,
    /// Operator name as declared in the feed (may be empty).
    pub operator: String,
    /// WGS84 degrees.
    pub latitude: f64,
    /// WGS84 degrees.
    pub longitude: f64,
    /// Remaining source columns: column name → raw cell text.
    pub extra: BTreeMap<String, String>,
}

impl StationRecord {
    /// Cell text for a given (canonical) column name, for raw-data display.
    pub fn display_value(&self, column: &str) -> String {
        match column {
            crate::data::loader::POWER_COLUMN => format!("{}", self.power_kw),
            crate::data::loader::OPERATOR_COLUMN => self.operator.clone(),
            "latitude" => format!("{}", self.latitude),
            "longitude" => format!("{}", self.longitude),
            other => self.extra.get(other).cloned().unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// StationTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable after load; every derived view is a
/// fresh projection, never an in-place update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationTable {
    /// All stations, in source-file order.
    pub records: Vec<StationRecord>,
    /// Header names after canonical renaming, in source order.
    pub columns: Vec<String>,
}

impl StationTable {
    /// A zero-row table with no guaranteed columns, used when loading fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique operator names in order of first appearance, for the filter
    /// multiselect.
    pub fn operators(&self) -> Vec<String> {
        let mut seen = std::collections::BTreeSet::new();
        let mut out = Vec::new();
        for rec in &self.records {
            if seen.insert(rec.operator.as_str()) {
                out.push(rec.operator.clone());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(op: &str) -> StationRecord {
        StationRecord {
            power_kw: 22.0,
            operator: op.to_string(),
            latitude: 48.0,
            longitude: 2.0,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn operators_are_unique_in_appearance_order() {
        let table = StationTable {
            records: vec![record("Izivia"), record("Allego"), record("Izivia")],
            columns: vec![],
        };
        assert_eq!(table.operators(), vec!["Izivia", "Allego"]);
    }

    #[test]
    fn empty_table_has_no_operators() {
        assert!(StationTable::empty().operators().is_empty());
        assert_eq!(StationTable::empty().len(), 0);
    }
}
