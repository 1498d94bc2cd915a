use std::path::PathBuf;

use crate::model::feed::GtfsTable;

/// fatal conditions that abort a parse. recoverable conditions are
/// collected as [`crate::model::GtfsGoWarning`] values instead.
#[derive(thiserror::Error, Debug)]
pub enum GtfsGoError {
    #[error("required table {table} not found at {path:?}")]
    MissingTableError { table: GtfsTable, path: PathBuf },
    #[error("failure reading table {table} at {path:?}: {source}")]
    TableReadError {
        table: GtfsTable,
        path: PathBuf,
        source: csv::Error,
    },
    #[error("feed directory {0:?} does not exist or is not a directory")]
    FeedDirectoryError(PathBuf),
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid argument: {0}")]
    InvalidArgumentError(String),
    #[error("failure writing output {path:?}: {message}")]
    OutputError { path: PathBuf, message: String },
    #[error("failure during file I/O: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
