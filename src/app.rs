use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChargeViewerApp {
    pub state: AppState,
}

impl Default for ChargeViewerApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for ChargeViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Initial load on the first frame. The fetch is synchronous and
        // blocks this render pass until it completes or fails.
        if !self.state.load_attempted {
            self.state.load_stations();
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters + operator counts ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: power chart over station map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let half = (ui.available_height() - 48.0) * 0.5;
            ui.heading("Stations per nominal power (kW)");
            plot::power_chart(ui, &self.state, half);
            ui.heading("Station map");
            plot::station_map(ui, &self.state, half);
        });

        // ---- Raw data window (toggled from the top bar) ----
        panels::raw_data_window(ctx, &mut self.state);
    }
}
