use std::sync::Arc;

use crate::color::OperatorColors;
use crate::data::cache::TableCache;
use crate::data::filter::FilterSelection;
use crate::data::loader::{HttpFetcher, DATA_URL};
use crate::data::model::StationTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Process-lifetime table cache, keyed by URL.
    pub cache: TableCache,

    /// Network seam; owned here so the cache stays injectable.
    pub fetcher: HttpFetcher,

    /// Loaded dataset (None until the first load attempt finishes).
    pub table: Option<Arc<StationTable>>,

    /// Unique operator names for the filter widget, appearance order.
    pub operators: Vec<String>,

    /// Colours for the operator widgets.
    pub operator_colors: OperatorColors,

    /// Current map filter; recreated on every interaction.
    pub selection: FilterSelection,

    /// Whether the raw-data window is open.
    pub show_raw: bool,

    /// Load-error message shown in the top bar.
    pub status_message: Option<String>,

    /// Whether the first-frame load has already run.
    pub load_attempted: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            cache: TableCache::new(),
            fetcher: HttpFetcher::new(),
            table: None,
            operators: Vec::new(),
            operator_colors: OperatorColors::default(),
            selection: FilterSelection::default(),
            show_raw: false,
            status_message: None,
            load_attempted: false,
        }
    }
}

impl AppState {
    /// Load (or re-use from cache) the station feed. Blocks until the fetch
    /// completes or fails; on failure the views run against an empty table
    /// and the error text lands in the top bar.
    pub fn load_stations(&mut self) {
        self.load_attempted = true;
        match self.cache.load(DATA_URL, &self.fetcher) {
            Ok(table) => {
                log::info!(
                    "Loaded {} stations across {} operators",
                    table.len(),
                    table.operators().len()
                );
                self.operators = table.operators();
                self.operator_colors = OperatorColors::new(&self.operators);
                self.table = Some(table);
                self.status_message = None;
            }
            Err(err) => {
                log::error!("Failed to load station data: {err}");
                self.status_message = Some(format!("Error loading data: {err}"));
                self.operators = Vec::new();
                self.operator_colors = OperatorColors::default();
                self.table = Some(Arc::new(StationTable::empty()));
            }
        }
    }

    /// Toggle one operator in the map filter.
    pub fn toggle_operator(&mut self, name: &str) {
        if !self.selection.operators.remove(name) {
            self.selection.operators.insert(name.to_string());
        }
    }

    /// Empty the operator set, i.e. show every operator.
    pub fn clear_operators(&mut self) {
        self.selection.operators.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_operator_flips_membership() {
        let mut state = AppState::default();
        state.toggle_operator("Izivia");
        assert!(state.selection.operators.contains("Izivia"));
        state.toggle_operator("Izivia");
        assert!(state.selection.operators.is_empty());
    }

    #[test]
    fn clear_operators_empties_the_set() {
        let mut state = AppState::default();
        state.toggle_operator("Izivia");
        state.toggle_operator("Allego");
        state.clear_operators();
        assert!(state.selection.operators.is_empty());
    }
}
