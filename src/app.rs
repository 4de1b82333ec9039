use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MarkerErrorsApp {
    pub state: AppState,
}

impl MarkerErrorsApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for MarkerErrorsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: the two plots side by side ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                plot::average_errors_plot(&mut columns[0], &self.state);
                plot::frame_errors_plot(&mut columns[1], &self.state);
            });
        });
    }
}
