//! Data layer: loading, normalization, and projection.
//!
//! ```text
//!  metadata.csv
//!       │
//!       ▼
//!  ┌──────────┐
//!  │  loader   │  parse file → RawTable (typed cells)
//!  └──────────┘
//!       │
//!       ▼
//!  ┌──────────┐
//!  │ prepare   │  derive Cycle_Index, validate, project
//!  └──────────┘
//!       │
//!       ▼
//!  ┌────────────────┐
//!  │ ProjectedTable  │  {Cycle_Index, Capacity, Re, Rct}
//!  └────────────────┘
//! ```
//!
//! The projected table is built once at startup and never mutated; the web
//! layer shares it across requests behind an `Arc`.

pub mod error;
pub mod loader;
pub mod model;
pub mod prepare;

pub use error::DataError;
pub use model::{CellValue, ColumnSummary, ProjectedTable, RawTable, CYCLE_INDEX, METRIC_COLUMNS};
pub use prepare::{load_and_normalize, normalize};
