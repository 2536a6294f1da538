use std::collections::BTreeSet;

use super::model::StationRecord;

// ---------------------------------------------------------------------------
// Filter selection: operator set + power interval
// ---------------------------------------------------------------------------

/// Slider bounds for the power range, in kW (from the source feed's
/// declared maximum).
pub const MIN_POWER: f64 = 0.0;
pub const MAX_POWER: f64 = 60_000.0;
/// Slider step, in kW.
pub const POWER_STEP: f64 = 500.0;

/// The user's current map filter. Recreated on every interaction and never
/// persisted.
///
/// An empty `operators` set means "no restriction": all operators pass. The
/// power interval is closed on both ends; an inverted interval
/// (`min_power > max_power`) matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub operators: BTreeSet<String>,
    pub min_power: f64,
    pub max_power: f64,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            operators: BTreeSet::new(),
            min_power: MIN_POWER,
            max_power: MAX_POWER,
        }
    }
}

impl FilterSelection {
    /// Whether a station passes both the power and the operator constraint.
    pub fn matches(&self, record: &StationRecord) -> bool {
        let in_range = record.power_kw >= self.min_power && record.power_kw <= self.max_power;
        let operator_ok = self.operators.is_empty() || self.operators.contains(&record.operator);
        in_range && operator_ok
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn station(power_kw: f64, operator: &str) -> StationRecord {
        StationRecord {
            power_kw,
            operator: operator.to_string(),
            latitude: 48.0,
            longitude: 2.0,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn empty_operator_set_matches_any_operator() {
        let selection = FilterSelection::default();
        assert!(selection.matches(&station(22.0, "Izivia")));
        assert!(selection.matches(&station(22.0, "")));
    }

    #[test]
    fn operator_set_restricts_matches() {
        let mut selection = FilterSelection::default();
        selection.operators.insert("Izivia".to_string());
        assert!(selection.matches(&station(22.0, "Izivia")));
        assert!(!selection.matches(&station(22.0, "Allego")));
    }

    #[test]
    fn power_interval_is_closed() {
        let selection = FilterSelection {
            min_power: 22.0,
            max_power: 50.0,
            ..Default::default()
        };
        assert!(selection.matches(&station(22.0, "A")));
        assert!(selection.matches(&station(50.0, "A")));
        assert!(!selection.matches(&station(21.9, "A")));
        assert!(!selection.matches(&station(50.1, "A")));
    }

    #[test]
    fn inverted_interval_matches_nothing() {
        let selection = FilterSelection {
            min_power: 50.0,
            max_power: 22.0,
            ..Default::default()
        };
        assert!(!selection.matches(&station(30.0, "A")));
        assert!(!selection.matches(&station(50.0, "A")));
    }
}
