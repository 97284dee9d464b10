use std::path::Path;

use super::error::{DataError, Result};
use super::model::{CellValue, RawTable};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse a CSV file into a [`RawTable`].
///
/// Expects a header row; every data row must have the same number of fields
/// as the header. Cells are typed by [`CellValue::parse`], so `"5"` becomes
/// an integer and `"0.1"` a float without any schema up front.
pub fn load_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| wrap_csv_error(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| wrap_csv_error(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| wrap_csv_error(path, e))?;
        if record.len() != headers.len() {
            return Err(DataError::Malformed(format!(
                "row {} has {} fields, expected {}",
                row_no,
                record.len(),
                headers.len()
            )));
        }
        rows.push(record.iter().map(CellValue::parse).collect());
    }

    Ok(RawTable { headers, rows })
}

/// Split an I/O failure (file missing/unreadable) from a parse failure so
/// the error message points at the right culprit.
fn wrap_csv_error(path: &Path, e: csv::Error) -> DataError {
    if e.is_io_error() {
        match e.into_kind() {
            csv::ErrorKind::Io(source) => DataError::Io {
                path: path.to_path_buf(),
                source,
            },
            // is_io_error() guarantees the Io kind
            _ => unreachable!(),
        }
    } else {
        DataError::Csv {
            path: path.to_path_buf(),
            source: e,
        }
    }
}
