use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Points};

use crate::data::views;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Power histogram (central panel, top half)
// ---------------------------------------------------------------------------

/// Bar chart of stations per truncated nominal power. Always reflects the
/// full table, regardless of the map filter.
pub fn power_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(table) = &state.table else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Loading data…");
        });
        return;
    };

    let histogram = views::power_histogram(table);

    let bars: Vec<Bar> = histogram
        .iter()
        .map(|(&power, &count)| Bar::new(power as f64, count as f64).width(1.0))
        .collect();

    Plot::new("power_chart")
        .height(height)
        .x_axis_label("Nominal power (kW)")
        .y_axis_label("Stations")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("stations")
                    .color(Color32::LIGHT_BLUE),
            );
        });
}

// ---------------------------------------------------------------------------
// Station map (central panel, bottom half)
// ---------------------------------------------------------------------------

/// Scatter of the filtered stations: longitude on x, latitude on y, unit
/// aspect ratio so France keeps its shape.
pub fn station_map(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(table) = &state.table else {
        return;
    };

    let subset = views::filtered_geo_subset(table, &state.selection);

    let points: PlotPoints = subset
        .iter()
        .map(|&(lat, lon)| [lon, lat])
        .collect();

    Plot::new("station_map")
        .height(height)
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .name("stations")
                    .color(Color32::LIGHT_RED)
                    .radius(1.5),
            );
        });
}
