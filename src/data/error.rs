use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for the data layer.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors raised while loading or normalizing the dataset.
///
/// `Io`, `Csv` and `Malformed` are load failures (missing/unreadable/
/// malformed input) and are fatal at startup. `MissingColumn` means the
/// projection could not find a required column and names it.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed dataset: {0}")]
    Malformed(String),

    #[error("required column `{0}` is missing")]
    MissingColumn(String),
}
