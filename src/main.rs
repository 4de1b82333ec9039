mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Result;
use app::MarkerErrorsApp;
use config::ViewerConfig;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = ViewerConfig::default();
    let state = AppState::load(config.clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Marker Fitting Errors",
        options,
        Box::new(|_cc| Ok(Box::new(MarkerErrorsApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer window: {e}"))
}
