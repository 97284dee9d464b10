use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the source CSV
// ---------------------------------------------------------------------------

/// A dynamically-typed CSV cell. Distinct-value counting puts cells in
/// `BTreeSet`s, so `CellValue` must be totally ordered.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Empty,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Empty => 0,
                Integer(_) => 1,
                Float(_) => 2,
                String(_) => 3,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Empty, Empty) => std::cmp::Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Empty => write!(f, "<empty>"),
        }
    }
}

impl CellValue {
    /// Parse a raw CSV field into the narrowest matching type.
    pub fn parse(s: &str) -> CellValue {
        let s = s.trim();
        if s.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        CellValue::String(s.to_string())
    }

    /// Try to interpret the value as an `f64` for plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// RawTable – the parsed CSV before normalization
// ---------------------------------------------------------------------------

/// The source table exactly as parsed: a header row plus typed cells.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Column names in file order.
    pub headers: Vec<String>,
    /// Rows in file order; every row has `headers.len()` cells.
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of distinct values in a column, or `None` if the column
    /// does not exist.
    pub fn distinct_count(&self, name: &str) -> Option<usize> {
        let idx = self.column_index(name)?;
        let uniques: BTreeSet<&CellValue> = self.rows.iter().map(|r| &r[idx]).collect();
        Some(uniques.len())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ProjectedTable – what the charts read
// ---------------------------------------------------------------------------

/// Name of the derived sequence column.
pub const CYCLE_INDEX: &str = "Cycle_Index";

/// The metric columns kept by the projection, in diagnostic-reporting order.
pub const METRIC_COLUMNS: [&str; 3] = ["Re", "Rct", "Capacity"];

/// The normalized, projected table: a numeric cycle index plus exactly the
/// three metric series. Column-oriented because the charts consume whole
/// columns. Immutable after construction; request handlers share it behind
/// an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedTable {
    cycle_index: Vec<f64>,
    series: BTreeMap<String, Vec<f64>>,
}

impl ProjectedTable {
    /// Assemble a projected table. Every series must have the same length
    /// as the cycle index; the preparer is the only producer.
    pub(crate) fn new(cycle_index: Vec<f64>, series: BTreeMap<String, Vec<f64>>) -> Self {
        debug_assert!(series.values().all(|s| s.len() == cycle_index.len()));
        ProjectedTable {
            cycle_index,
            series,
        }
    }

    /// The derived cycle index, in row order.
    pub fn cycle_index(&self) -> &[f64] {
        &self.cycle_index
    }

    /// A metric series by column name, if present.
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(|v| v.as_slice())
    }

    /// All column names: `Cycle_Index` followed by the metric columns in
    /// presentation order (Capacity, Re, Rct), independent of map key
    /// order. Columns absent from a hand-built table are skipped.
    pub fn column_names(&self) -> Vec<&str> {
        std::iter::once(CYCLE_INDEX)
            .chain(
                ["Capacity", "Re", "Rct"]
                    .into_iter()
                    .filter(|name| self.series.contains_key(*name)),
            )
            .collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.cycle_index.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.cycle_index.is_empty()
    }

    /// Per-column summary statistics, in column order. Logged at startup so
    /// flat or absurd series are visible before anyone looks at a chart.
    pub fn describe(&self) -> Vec<ColumnSummary> {
        std::iter::once((CYCLE_INDEX, self.cycle_index.as_slice()))
            .chain(
                self.series
                    .iter()
                    .map(|(name, vals)| (name.as_str(), vals.as_slice())),
            )
            .map(|(name, vals)| ColumnSummary::of(name, vals))
            .collect()
    }
}

/// Summary statistics for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl ColumnSummary {
    fn of(name: &str, vals: &[f64]) -> Self {
        let count = vals.len();
        let mean = if count == 0 {
            f64::NAN
        } else {
            vals.iter().sum::<f64>() / count as f64
        };
        let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        ColumnSummary {
            column: name.to_string(),
            count,
            mean,
            min,
            max,
        }
    }
}

impl fmt::Display for ColumnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: count={} mean={:.4} min={:.4} max={:.4}",
            self.column, self.count, self.mean, self.min, self.max
        )
    }
}
