use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::ErrorTable;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a fitting log from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<ErrorTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    load_reader(file).with_context(|| format!("loading {}", path.display()))
}

/// CSV layout: header row naming each marker, then one row per capture
/// frame holding one float per marker.
///
/// ```text
/// head,l_wrist,r_wrist
/// 0.0121,0.0087,0.0093
/// 0.0118,0.0091,0.0102
/// ```
pub fn load_reader<R: Read>(reader: R) -> Result<ErrorTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    check_header(&headers)?;

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        // File line of this record; the header is line 1.
        let line = row_no + 2;
        // The csv reader is strict about record length, so ragged rows fail here.
        let record = result.with_context(|| format!("CSV line {line}"))?;

        for (col_idx, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().with_context(|| {
                format!(
                    "Line {line}, column '{}': '{field}' is not a number",
                    headers[col_idx]
                )
            })?;
            columns[col_idx].push(value);
        }
    }

    if columns.first().map_or(true, |c| c.is_empty()) {
        bail!("CSV has a header but no capture frames");
    }

    ErrorTable::from_columns(headers.into_iter().zip(columns).collect())
}

/// A usable header names every column, and is not itself a row of numbers.
fn check_header(headers: &[String]) -> Result<()> {
    if headers.is_empty() {
        bail!("CSV is empty: missing header row");
    }
    if let Some(idx) = headers.iter().position(|h| h.is_empty()) {
        bail!("CSV header has an empty name in column {idx}");
    }
    if headers.iter().all(|h| h.parse::<f64>().is_ok()) {
        bail!("CSV header row is numeric: missing header row");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_header_and_columns() {
        let csv = "head, l_wrist ,r_wrist\n0.01,0.02,0.03\n0.04,0.05,0.06\n";
        let table = load_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.marker_names(), ["head", "l_wrist", "r_wrist"]);
        assert_eq!(table.frame_count(), 2);
        assert_eq!(table.column("l_wrist"), Some(&[0.02, 0.05][..]));
    }

    #[test]
    fn rejects_ragged_rows() {
        let csv = "a,b,c\n1,2,3\n4,5\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV line 3"));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(load_reader("".as_bytes()).is_err());
    }

    #[test]
    fn rejects_numeric_header() {
        let csv = "0.01,0.02\n0.03,0.04\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing header"));
    }

    #[test]
    fn rejects_blank_header_name() {
        assert!(load_reader("a,,c\n1,2,3\n".as_bytes()).is_err());
    }

    #[test]
    fn rejects_non_numeric_cell() {
        let err = load_reader("a,b\n1,2\n3,oops\n".as_bytes()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Line 3"), "{msg}");
        assert!(msg.contains("'b'"), "{msg}");
    }

    #[test]
    fn first_data_row_is_line_two() {
        let err = load_reader("a,b\nx,1\n".as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("Line 2,"));
    }

    #[test]
    fn rejects_header_without_frames() {
        assert!(load_reader("a,b\n".as_bytes()).is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x,y").unwrap();
        writeln!(file, "0.5,1.5").unwrap();

        let table = load_file(file.path()).unwrap();
        assert_eq!(table.column("y"), Some(&[1.5][..]));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitting_log.csv");
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("fitting_log.csv"));
    }
}
