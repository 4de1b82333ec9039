use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Viewer defaults
// ---------------------------------------------------------------------------

/// Log file read from the working directory.
pub const DEFAULT_INPUT: &str = "fitting_log.csv";

/// Upper bound of both error axes, in meters.
pub const ERROR_CEILING: f64 = 0.035;

/// Compile-time settings for the viewer window and its plots.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub input: PathBuf,
    /// Both panels share the y range `[0, error_ceiling]`.
    pub error_ceiling: f64,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Bar width in plot units (one marker slot is 1.0 wide).
    pub bar_width: f64,
    /// Vertical space reserved under the bar chart for rotated marker names.
    pub label_band: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            error_ceiling: ERROR_CEILING,
            window_size: [1200.0, 600.0],
            min_window_size: [600.0, 300.0],
            bar_width: 0.8,
            label_band: 110.0,
        }
    }
}
