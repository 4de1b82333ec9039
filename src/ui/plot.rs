use std::f32::consts::FRAC_PI_2;

use eframe::egui::{self, Color32, FontId, Sense, Ui};
use eframe::egui::epaint::TextShape;
use egui_plot::{Bar, BarChart, HLine, Legend, Line, Plot, PlotBounds, PlotPoint, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Plot geometry
// ---------------------------------------------------------------------------

/// One bar of the average-error chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec<'a> {
    pub name: &'a str,
    pub centre: f64,
    pub height: f64,
    pub color: Color32,
}

/// One marker's error trace over the capture frames.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries<'a> {
    pub name: &'a str,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
}

/// Bars at `i + 0.5` in header order, height = the marker's mean error.
pub fn bar_layout(state: &AppState) -> Vec<BarSpec<'_>> {
    state
        .table
        .marker_names()
        .iter()
        .enumerate()
        .map(|(i, name)| BarSpec {
            name: name.as_str(),
            centre: i as f64 + 0.5,
            height: state.summary.mean_for(name).unwrap_or(0.0),
            color: state.colors.color_for(name),
        })
        .collect()
}

/// `(min, max)` corners of the bar chart: x over `[0, markers]`.
pub fn bar_bounds(state: &AppState) -> ([f64; 2], [f64; 2]) {
    (
        [0.0, 0.0],
        [state.table.marker_count() as f64, state.config.error_ceiling],
    )
}

/// Raw values against frame index, one series per marker in lexicographic order.
pub fn line_series(state: &AppState) -> Vec<LineSeries<'_>> {
    state
        .table
        .sorted_columns()
        .map(|(name, values)| LineSeries {
            name,
            points: values
                .iter()
                .enumerate()
                .map(|(frame, &err)| [frame as f64, err])
                .collect(),
            color: state.colors.color_for(name),
        })
        .collect()
}

/// `(min, max)` corners of the frame chart: x over `[0, frames]`.
pub fn line_bounds(state: &AppState) -> ([f64; 2], [f64; 2]) {
    (
        [0.0, 0.0],
        [state.table.frame_count() as f64, state.config.error_ceiling],
    )
}

// ---------------------------------------------------------------------------
// Panel A: average error per marker
// ---------------------------------------------------------------------------

/// Bar chart with a reference line at the average of averages and marker
/// names rotated underneath.
pub fn average_errors_plot(ui: &mut Ui, state: &AppState) {
    let config = &state.config;
    let layout = bar_layout(state);
    let (min, max) = bar_bounds(state);

    ui.heading("Average Marker Errors");

    let bars: Vec<Bar> = layout
        .iter()
        .map(|bar| {
            Bar::new(bar.centre, bar.height)
                .width(config.bar_width)
                .fill(bar.color)
                .name(bar.name)
        })
        .collect();

    let plot_height = (ui.available_height() - config.label_band).max(100.0);
    let average = state.summary.average_of_means;

    let response = Plot::new("average_errors")
        .height(plot_height)
        .legend(Legend::default())
        .y_axis_label("(m)")
        // Marker names are painted rotated below the plot instead.
        .x_axis_formatter(|_mark, _range| String::new())
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
            plot_ui.bar_chart(BarChart::new(bars));
            plot_ui.hline(HLine::new(average).name("average").color(Color32::RED));
        });

    // The transform from the finished pass reflects this frame's bounds and size.
    let centres: Vec<f32> = layout
        .iter()
        .map(|bar| {
            response
                .transform
                .position_from_point(&PlotPoint::new(bar.centre, 0.0))
                .x
        })
        .collect();

    rotated_labels(ui, &layout, &centres, config.label_band);
}

/// Paint each name reading bottom-to-top, its end just under the plot and
/// centred on its bar.
fn rotated_labels(ui: &mut Ui, bars: &[BarSpec<'_>], centres: &[f32], band_height: f32) {
    let (band, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), band_height),
        Sense::hover(),
    );
    let painter = ui.painter();
    let color = ui.visuals().text_color();

    for (bar, &x) in bars.iter().zip(centres) {
        let galley =
            painter.layout_no_wrap(bar.name.to_string(), FontId::proportional(12.0), color);
        let size = galley.size();
        let pos = egui::pos2(x - size.y / 2.0, band.top() + 4.0 + size.x);
        painter.add(TextShape::new(pos, galley, color).with_angle(-FRAC_PI_2));
    }
}

// ---------------------------------------------------------------------------
// Panel B: error per capture frame
// ---------------------------------------------------------------------------

/// One line per marker, coloured like its bar.
pub fn frame_errors_plot(ui: &mut Ui, state: &AppState) {
    let config = &state.config;
    let series = line_series(state);
    let (min, max) = line_bounds(state);

    ui.heading("Marker Error per Capture Frame");

    let plot_height = (ui.available_height() - config.label_band).max(100.0);

    Plot::new("frame_errors")
        .height(plot_height)
        .x_axis_label("capture frame")
        .y_axis_label("(m)")
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));

            for s in series {
                let line = Line::new(PlotPoints::from(s.points))
                    .name(s.name)
                    .color(s.color)
                    .width(1.0);

                plot_ui.line(line);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ERROR_CEILING, ViewerConfig};
    use crate::data::loader::load_reader;

    fn state(csv: &str) -> AppState {
        let table = load_reader(csv.as_bytes()).unwrap();
        AppState::from_table(ViewerConfig::default(), table, "fitting_log.csv".to_string())
    }

    const THREE_MARKERS: &str = "\
wrist,ankle,knee
0.010,0.020,0.001
0.020,0.020,0.002
0.030,0.020,0.003
0.040,0.020,0.010
";

    #[test]
    fn bars_are_centred_in_header_order() {
        let state = state(THREE_MARKERS);
        let bars = bar_layout(&state);

        let names: Vec<&str> = bars.iter().map(|b| b.name).collect();
        assert_eq!(names, ["wrist", "ankle", "knee"]);
        let centres: Vec<f64> = bars.iter().map(|b| b.centre).collect();
        assert_eq!(centres, [0.5, 1.5, 2.5]);
    }

    #[test]
    fn bar_heights_are_marker_means() {
        let state = state(THREE_MARKERS);
        for bar in bar_layout(&state) {
            assert_eq!(Some(bar.height), state.summary.mean_for(bar.name));
        }
    }

    #[test]
    fn bar_and_line_share_marker_colour() {
        let state = state(THREE_MARKERS);
        let bars = bar_layout(&state);
        let lines = line_series(&state);
        assert_eq!(lines.len(), bars.len());

        for bar in &bars {
            let line = lines.iter().find(|l| l.name == bar.name).unwrap();
            assert_eq!(line.color, bar.color);
        }
    }

    #[test]
    fn lines_follow_frames_in_lexicographic_order() {
        let state = state(THREE_MARKERS);
        let lines = line_series(&state);

        let names: Vec<&str> = lines.iter().map(|l| l.name).collect();
        assert_eq!(names, ["ankle", "knee", "wrist"]);
        assert_eq!(
            lines[1].points,
            [[0.0, 0.001], [1.0, 0.002], [2.0, 0.003], [3.0, 0.010]]
        );
    }

    #[test]
    fn axes_span_markers_frames_and_ceiling() {
        let state = state(THREE_MARKERS);
        assert_eq!(bar_bounds(&state), ([0.0, 0.0], [3.0, ERROR_CEILING]));
        assert_eq!(line_bounds(&state), ([0.0, 0.0], [4.0, ERROR_CEILING]));
        assert_eq!(ERROR_CEILING, 0.035);
    }
}
