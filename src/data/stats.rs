use std::collections::BTreeMap;

use super::model::ErrorTable;

// ---------------------------------------------------------------------------
// Per-marker averages
// ---------------------------------------------------------------------------

/// Mean error of every marker plus the mean of those means.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSummary {
    /// Marker name → mean error over all frames.
    pub means: BTreeMap<String, f64>,
    /// Unweighted mean of `means`, not the mean over every sample.
    pub average_of_means: f64,
}

impl ErrorSummary {
    pub fn from_table(table: &ErrorTable) -> Self {
        let (names, columns): (Vec<&str>, Vec<&[f64]>) = table.sorted_columns().unzip();

        let means: BTreeMap<String, f64> = names
            .into_iter()
            .map(str::to_string)
            .zip(column_means(&columns))
            .collect();

        for (name, m) in &means {
            log::debug!("Mean error for {name}: {m:.6} m");
        }

        ErrorSummary {
            means,
            average_of_means: average_of_means(&columns),
        }
    }

    pub fn mean_for(&self, marker: &str) -> Option<f64> {
        self.means.get(marker).copied()
    }
}

/// Mean of each column, in the order given.
pub fn column_means(columns: &[&[f64]]) -> Vec<f64> {
    columns.iter().map(|values| mean(values)).collect()
}

/// `sum(means) / N`: every column weighs the same however many samples it has.
pub fn average_of_means(columns: &[&[f64]]) -> f64 {
    mean(&column_means(columns))
}

/// Arithmetic mean; NaN for an empty slice.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
