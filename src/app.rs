use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ScovilleScoutApp {
    pub state: AppState,
}

impl ScovilleScoutApp {
    /// Build the app and attempt the initial dataset load. A missing or
    /// malformed file only produces a status message; the window still opens.
    pub fn new(initial_dataset: PathBuf) -> Self {
        let mut state = AppState::default();
        state.load(&initial_dataset);
        Self { state }
    }
}

impl eframe::App for ScovilleScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: credits / attribution ----
        egui::TopBottomPanel::bottom("credits_bar").show(ctx, |ui| {
            panels::credits_bar(ui);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics + table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::pepper_table(ui, &self.state);
        });
    }
}
