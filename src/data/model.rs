use std::collections::BTreeMap;

use anyhow::{Result, bail};

// ---------------------------------------------------------------------------
// ErrorTable – the complete loaded log
// ---------------------------------------------------------------------------

/// Fitting errors keyed by marker name, one value per capture frame.
///
/// Every column has the same length. Header order is kept for display while
/// the `BTreeMap` gives lexicographic order for computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorTable {
    /// Marker names in file header order.
    header: Vec<String>,
    /// Marker name → error per frame.
    columns: BTreeMap<String, Vec<f64>>,
    frames: usize,
}

impl ErrorTable {
    /// Build a table from `(name, values)` pairs given in header order.
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let frames = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        let mut header = Vec::with_capacity(columns.len());
        let mut by_name = BTreeMap::new();

        for (name, values) in columns {
            if values.len() != frames {
                bail!(
                    "Column '{name}' has {} values but expected {frames}",
                    values.len()
                );
            }
            if by_name.contains_key(&name) {
                bail!("Duplicate column name '{name}'");
            }
            header.push(name.clone());
            by_name.insert(name, values);
        }

        Ok(ErrorTable {
            header,
            columns: by_name,
            frames,
        })
    }

    /// Marker names in the order they appear in the file header.
    pub fn marker_names(&self) -> &[String] {
        &self.header
    }

    /// Columns in lexicographic name order.
    pub fn sorted_columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    #[cfg(test)]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Number of markers (columns).
    pub fn marker_count(&self) -> usize {
        self.header.len()
    }

    /// Number of capture frames (rows).
    pub fn frame_count(&self) -> usize {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str, values: &[f64]) -> (String, Vec<f64>) {
        (name.to_string(), values.to_vec())
    }

    #[test]
    fn keeps_header_order_and_sorts_for_iteration() {
        let table = ErrorTable::from_columns(vec![
            col("wrist", &[0.1, 0.2]),
            col("elbow", &[0.3, 0.4]),
            col("shoulder", &[0.5, 0.6]),
        ])
        .unwrap();

        assert_eq!(table.marker_names(), ["wrist", "elbow", "shoulder"]);
        let sorted: Vec<&str> = table.sorted_columns().map(|(n, _)| n).collect();
        assert_eq!(sorted, ["elbow", "shoulder", "wrist"]);
        assert_eq!(table.marker_count(), 3);
        assert_eq!(table.frame_count(), 2);
        assert_eq!(table.column("elbow"), Some(&[0.3, 0.4][..]));
    }

    #[test]
    fn rejects_unequal_column_lengths() {
        let err = ErrorTable::from_columns(vec![col("a", &[1.0, 2.0]), col("b", &[1.0])])
            .unwrap_err();
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = ErrorTable::from_columns(vec![col("a", &[1.0]), col("a", &[2.0])]).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }
}
