mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::ScovilleScoutApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset path argument; falls back to the conventional name.
    let dataset_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("chile_data.csv"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Scoville Scout – Chile Pepper Browser",
        options,
        Box::new(move |_cc| Ok(Box::new(ScovilleScoutApp::new(dataset_path)))),
    )
}
