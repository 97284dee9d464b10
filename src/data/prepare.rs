use std::collections::BTreeMap;
use std::path::Path;

use super::error::{DataError, Result};
use super::loader::load_csv;
use super::model::{ProjectedTable, RawTable, CYCLE_INDEX, METRIC_COLUMNS};

/// The source identifier column expected in the input file.
const TEST_ID: &str = "test_id";

/// Rows shown by the startup head preview.
const HEAD_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Dataset Preparer
// ---------------------------------------------------------------------------

/// Load a CSV and normalize it into the table the charts read.
///
/// Pure with respect to the file: the same bytes always produce the same
/// table. Diagnostics go to the logger; nothing is written back.
pub fn load_and_normalize(path: &Path) -> Result<ProjectedTable> {
    let raw = load_csv(path)?;
    log::info!("loaded {} rows from {}", raw.len(), path.display());
    let table = normalize(&raw)?;
    log_overview(&table);
    Ok(table)
}

/// Derive `Cycle_Index` and project down to the plotted columns.
///
/// `test_id` with at least two distinct values passes through as the cycle
/// index, values preserved. A constant (or empty) `test_id` carries no
/// ordering information, so the index is synthesized as the 1-based row
/// position, on the assumption that row order reflects cycle order.
pub fn normalize(raw: &RawTable) -> Result<ProjectedTable> {
    let distinct_ids = raw
        .distinct_count(TEST_ID)
        .ok_or_else(|| DataError::MissingColumn(TEST_ID.to_string()))?;

    let cycle_index = if distinct_ids <= 1 {
        log::warn!(
            "`{TEST_ID}` has constant values; synthesizing sequential {CYCLE_INDEX}"
        );
        (1..=raw.len()).map(|i| i as f64).collect()
    } else {
        passthrough_index(raw)?
    };

    // Observational only: a distinct count of 1 means a flat line ahead.
    for name in METRIC_COLUMNS {
        if let Some(count) = raw.distinct_count(name) {
            log::info!("unique {name} values: {count}");
        }
    }

    let mut series = BTreeMap::new();
    for name in METRIC_COLUMNS {
        series.insert(name.to_string(), numeric_column(raw, name)?);
    }

    Ok(ProjectedTable::new(cycle_index, series))
}

/// `test_id` renamed in place: values preserved, no reordering. The chart
/// x-axis is numeric, so non-numeric identifiers are rejected here rather
/// than producing a nonsense chart.
fn passthrough_index(raw: &RawTable) -> Result<Vec<f64>> {
    let idx = raw
        .column_index(TEST_ID)
        .ok_or_else(|| DataError::MissingColumn(TEST_ID.to_string()))?;
    raw.rows
        .iter()
        .enumerate()
        .map(|(row_no, row)| {
            row[idx].as_f64().ok_or_else(|| {
                DataError::Malformed(format!(
                    "row {row_no}: `{TEST_ID}` value `{}` is not numeric",
                    row[idx]
                ))
            })
        })
        .collect()
}

/// Extract a required metric column as `f64`s.
fn numeric_column(raw: &RawTable, name: &str) -> Result<Vec<f64>> {
    let idx = raw
        .column_index(name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;
    raw.rows
        .iter()
        .enumerate()
        .map(|(row_no, row)| {
            row[idx].as_f64().ok_or_else(|| {
                DataError::Malformed(format!(
                    "row {row_no}: `{name}` value `{}` is not numeric",
                    row[idx]
                ))
            })
        })
        .collect()
}

/// Startup visibility: summary stats at info, a head preview at debug.
fn log_overview(table: &ProjectedTable) {
    for summary in table.describe() {
        log::info!("{summary}");
    }
    if log::log_enabled!(log::Level::Debug) {
        let names = table.column_names();
        log::debug!("head: {}", names.join(", "));
        for row_no in 0..table.len().min(HEAD_ROWS) {
            let cells: Vec<String> = names
                .iter()
                .map(|&name| {
                    let val = if name == CYCLE_INDEX {
                        table.cycle_index()[row_no]
                    } else {
                        table.series(name).map(|s| s[row_no]).unwrap_or(f64::NAN)
                    };
                    format!("{val:.4}")
                })
                .collect();
            log::debug!("head: {}", cells.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::super::model::CellValue;
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| CellValue::parse(c)).collect())
                .collect(),
        }
    }

    fn battery_rows(test_ids: &[&str]) -> RawTable {
        let metric_rows: Vec<Vec<String>> = test_ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                vec![
                    id.to_string(),
                    format!("0.{}", i + 1),
                    format!("{}", i + 1),
                    format!("{:.1}", 2.0 - 0.1 * i as f64),
                ]
            })
            .collect();
        let borrowed: Vec<Vec<&str>> = metric_rows
            .iter()
            .map(|r| r.iter().map(|s| s.as_str()).collect())
            .collect();
        let slices: Vec<&[&str]> = borrowed.iter().map(|r| r.as_slice()).collect();
        raw(&["test_id", "Re", "Rct", "Capacity"], &slices)
    }

    #[test]
    fn constant_test_id_synthesizes_one_based_index() {
        let table = normalize(&battery_rows(&["5", "5", "5"])).expect("normalize");
        assert_eq!(table.cycle_index(), &[1.0, 2.0, 3.0]);
        assert_eq!(table.series("Re").unwrap(), &[0.1, 0.2, 0.3]);
        assert_eq!(table.series("Rct").unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(table.series("Capacity").unwrap(), &[2.0, 1.9, 1.8]);
    }

    #[test]
    fn distinct_test_id_passes_through_unchanged() {
        let table = normalize(&battery_rows(&["10", "20", "30"])).expect("normalize");
        assert_eq!(table.cycle_index(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn empty_table_synthesizes_empty_index() {
        let table = normalize(&raw(&["test_id", "Re", "Rct", "Capacity"], &[]))
            .expect("normalize");
        assert!(table.is_empty());
        assert_eq!(
            table.column_names(),
            vec!["Cycle_Index", "Capacity", "Re", "Rct"]
        );
    }

    #[test]
    fn projection_has_exactly_four_columns() {
        let with_extras = raw(
            &["test_id", "Re", "Rct", "Capacity", "ambient_temperature"],
            &[&["5", "0.1", "1", "2.0", "24"]],
        );
        let table = normalize(&with_extras).expect("normalize");
        assert_eq!(
            table.column_names(),
            vec!["Cycle_Index", "Capacity", "Re", "Rct"]
        );
        assert_eq!(table.series("ambient_temperature"), None);
    }

    #[test]
    fn missing_capacity_names_capacity() {
        let err = normalize(&raw(
            &["test_id", "Re", "Rct"],
            &[&["5", "0.1", "1"]],
        ))
        .unwrap_err();
        match err {
            DataError::MissingColumn(col) => assert_eq!(col, "Capacity"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn missing_test_id_names_test_id() {
        let err = normalize(&raw(
            &["Re", "Rct", "Capacity"],
            &[&["0.1", "1", "2.0"]],
        ))
        .unwrap_err();
        match err {
            DataError::MissingColumn(col) => assert_eq!(col, "test_id"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_passthrough_id_is_malformed() {
        let err = normalize(&raw(
            &["test_id", "Re", "Rct", "Capacity"],
            &[
                &["B0005", "0.1", "1", "2.0"],
                &["B0006", "0.2", "2", "1.9"],
            ],
        ))
        .unwrap_err();
        assert!(matches!(err, DataError::Malformed(_)), "got {err:?}");
    }

    #[test]
    fn loading_the_same_file_twice_is_idempotent() {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp file");
        file.write_all(b"test_id,Re,Rct,Capacity\n5,0.1,1,2.0\n5,0.2,2,1.9\n")
            .expect("write temp csv");

        let first = load_and_normalize(file.path()).expect("first load");
        let second = load_and_normalize(file.path()).expect("second load");
        assert_eq!(first, second);
    }
}
