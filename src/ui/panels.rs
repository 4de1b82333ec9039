use eframe::egui::Ui;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the summary strip above the two plots.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(&state.source_name);
        ui.separator();

        ui.label(format!(
            "{} markers, {} frames",
            state.table.marker_count(),
            state.table.frame_count()
        ));
        ui.separator();

        ui.label(format!(
            "average of averages: {:.5} m",
            state.summary.average_of_means
        ));
    });
}
