use anyhow::{Context, Result};

use crate::color::MarkerColors;
use crate::config::ViewerConfig;
use crate::data::loader;
use crate::data::model::ErrorTable;
use crate::data::stats::ErrorSummary;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the panels draw, computed once before the window opens.
pub struct AppState {
    pub config: ViewerConfig,
    pub table: ErrorTable,
    pub summary: ErrorSummary,
    pub colors: MarkerColors,
    /// File name shown in the top bar.
    pub source_name: String,
}

impl AppState {
    /// Load the configured log and derive averages and colours.
    pub fn load(config: ViewerConfig) -> Result<Self> {
        let table = loader::load_file(&config.input).context("loading fitting log")?;
        log::info!(
            "Loaded {} markers over {} frames from {}",
            table.marker_count(),
            table.frame_count(),
            config.input.display()
        );

        let source_name = config
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| config.input.display().to_string());

        Ok(Self::from_table(config, table, source_name))
    }

    pub fn from_table(config: ViewerConfig, table: ErrorTable, source_name: String) -> Self {
        let summary = ErrorSummary::from_table(&table);
        let colors = MarkerColors::for_table(&table);
        log::info!("Average of marker averages: {:.6} m", summary.average_of_means);

        AppState {
            config,
            table,
            summary,
            colors,
            source_name,
        }
    }
}
