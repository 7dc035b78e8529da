// ABOUTME: CSV averager for person measurements
// ABOUTME: Mean height/weight over all data rows with unit conversion

use std::path::Path;

use kiosk_config::constants::{INCH_TO_CM, POUND_TO_KG};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed numeric field {value:?} in row {row}")]
    Malformed { row: usize, value: String },
    #[error("CSV has no data rows")]
    Empty,
}

/// Computed averages, already unit-converted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyAverages {
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// Average height and weight across every data row of an
/// `id,height,weight` CSV. The header row is the only row excluded.
///
/// Heights are inches in the file and centimeters out; weights are pounds
/// in and kilograms out.
pub fn mean_from_csv(path: &Path) -> Result<BodyAverages, StatsError> {
    debug!("Reading measurements from {}", path.display());

    let mut reader = csv::Reader::from_path(path)?;

    let mut height_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut count = 0usize;

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // Data rows start right after the header
        let row = index + 2;
        height_sum += parse_field(&record, 1, row)?;
        weight_sum += parse_field(&record, 2, row)?;
        count += 1;
    }

    if count == 0 {
        return Err(StatsError::Empty);
    }

    let n = count as f64;
    Ok(BodyAverages {
        height_cm: (height_sum / n) * INCH_TO_CM,
        weight_kg: (weight_sum / n) * POUND_TO_KG,
    })
}

fn parse_field(record: &csv::StringRecord, column: usize, row: usize) -> Result<f64, StatsError> {
    let raw = record.get(column).unwrap_or("");
    raw.trim().parse::<f64>().map_err(|_| StatsError::Malformed {
        row,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_mean_over_all_data_rows() {
        let file = csv_file("id,height,weight\n1,70,150\n2,72,160\n");
        let averages = mean_from_csv(file.path()).unwrap();

        // mean height 71 in -> 180.34 cm, mean weight 155 lb -> 70.30676 kg
        assert!((averages.height_cm - 180.34).abs() < 1e-9);
        assert!((averages.weight_kg - 70.30676).abs() < 1e-9);
    }

    #[test]
    fn test_last_row_is_included() {
        // A single data row must not be sliced away
        let file = csv_file("id,height,weight\n1,70,150\n");
        let averages = mean_from_csv(file.path()).unwrap();
        assert!((averages.height_cm - 70.0 * 2.54).abs() < 1e-9);
    }

    #[test]
    fn test_header_only_is_empty() {
        let file = csv_file("id,height,weight\n");
        assert!(matches!(mean_from_csv(file.path()), Err(StatsError::Empty)));
    }

    #[test]
    fn test_malformed_field_reports_row() {
        let file = csv_file("id,height,weight\n1,70,150\n2,tall,160\n");
        match mean_from_csv(file.path()) {
            Err(StatsError::Malformed { row, value }) => {
                assert_eq!(row, 3);
                assert_eq!(value, "tall");
            }
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let missing = Path::new("definitely/not/here.csv");
        assert!(mean_from_csv(missing).is_err());
    }
}
