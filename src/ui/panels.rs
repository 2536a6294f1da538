use eframe::egui::{self, Color32, Context, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::{MAX_POWER, MIN_POWER, POWER_STEP};
use crate::data::views;
use crate::state::AppState;

fn operator_label(name: &str) -> &str {
    if name.is_empty() { "(unknown)" } else { name }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Data", |ui: &mut Ui| {
            // A cache hit makes this a no-op; after a failed load it
            // retries, because failures are never cached.
            if ui.button("Reload").clicked() {
                state.load_stations();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            let on_map = views::filtered_geo_subset(table, &state.selection).len();
            ui.label(format!("{} stations loaded, {} on map", table.len(), on_map));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_raw, "Raw data")
            .clicked()
        {
            state.show_raw = !state.show_raw;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets + operator counts
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(table) = state.table.clone() else {
        ui.label("No data loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the loops.
    let operators = state.operators.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Operator multiselect ----
            let n_selected = state.selection.operators.len();
            let header_text = format!("Operator  ({}/{})", n_selected, operators.len());

            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("Clear").clicked() {
                            state.clear_operators();
                        }
                        ui.weak("none selected = all");
                    });

                    for op in &operators {
                        let mut checked = state.selection.operators.contains(op);
                        let text = RichText::new(operator_label(op))
                            .color(state.operator_colors.color_for(op));
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_operator(op);
                        }
                    }
                });
            ui.separator();

            // ---- Power range ----
            ui.strong("Power range (kW)");
            ui.add(
                egui::Slider::new(&mut state.selection.min_power, MIN_POWER..=MAX_POWER)
                    .step_by(POWER_STEP)
                    .text("min"),
            );
            ui.add(
                egui::Slider::new(&mut state.selection.max_power, MIN_POWER..=MAX_POWER)
                    .step_by(POWER_STEP)
                    .text("max"),
            );
            // min > max is allowed; the map just goes empty.
            ui.separator();

            // ---- Stations per operator ----
            ui.strong("Stations per operator");
            let mut counts: Vec<(String, usize)> =
                views::operator_counts(&table).into_iter().collect();
            counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

            egui::Grid::new("operator_counts")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    for (op, count) in &counts {
                        ui.label(
                            RichText::new(operator_label(op))
                                .color(state.operator_colors.color_for(op)),
                        );
                        ui.label(count.to_string());
                        ui.end_row();
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Raw data window
// ---------------------------------------------------------------------------

/// Virtualised table of every loaded row and column.
pub fn raw_data_window(ctx: &Context, state: &mut AppState) {
    if !state.show_raw {
        return;
    }
    let Some(table) = state.table.clone() else {
        return;
    };

    egui::Window::new("Raw data")
        .open(&mut state.show_raw)
        .default_size([800.0, 400.0])
        .vscroll(false)
        .show(ctx, |ui: &mut Ui| {
            if table.is_empty() {
                ui.label("No rows.");
                return;
            }

            TableBuilder::new(ui)
                .striped(true)
                .columns(Column::auto().at_least(80.0), table.columns.len())
                .header(20.0, |mut header| {
                    for col in &table.columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(col);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, table.len(), |mut row| {
                        let rec = &table.records[row.index()];
                        for col in &table.columns {
                            row.col(|ui: &mut Ui| {
                                ui.label(rec.display_value(col));
                            });
                        }
                    });
                });
        });
}
