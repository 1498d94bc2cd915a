use std::path::Path;

use kdam::tqdm;
use serde::de::DeserializeOwned;

use crate::model::{feed::GtfsTable, GtfsGoError, GtfsGoWarning};

/// a deserialized row along with the 1-based line it was read from.
pub type TableRow<T> = (u64, T);

/// reads one GTFS table from the feed directory.
///
/// returns `Ok(None)` when the file is absent so that the caller can decide
/// whether that table was required. rows that fail to parse (wrong column
/// count, non-numeric value, bad date) are skipped and recorded as
/// [`GtfsGoWarning::MalformedRow`]. only failures of the file itself are
/// returned as errors.
pub fn read_table<T: DeserializeOwned>(
    feed_directory: &Path,
    table: GtfsTable,
    warnings: &mut Vec<GtfsGoWarning>,
) -> Result<Option<Vec<TableRow<T>>>, GtfsGoError> {
    let path = table.path_in(feed_directory);
    if !path.is_file() {
        log::debug!("table {table} not present in {feed_directory:?}");
        return Ok(None);
    }
    let read_error = |source: csv::Error| GtfsGoError::TableReadError {
        table,
        path: path.clone(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(&path)
        .map_err(read_error)?;
    let headers = reader.headers().map_err(read_error)?.clone();

    let mut rows: Vec<TableRow<T>> = vec![];
    let iter = tqdm!(reader.records(), desc = table.filename());
    for result in iter {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(read_error(e)),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                warnings.push(GtfsGoWarning::MalformedRow {
                    table,
                    line,
                    message: e.to_string(),
                });
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        match record.deserialize::<T>(Some(&headers)) {
            Ok(row) => rows.push((line, row)),
            Err(e) => warnings.push(GtfsGoWarning::MalformedRow {
                table,
                line,
                message: e.to_string(),
            }),
        }
    }
    eprintln!();
    log::info!("read {} rows from {table}", rows.len());
    Ok(Some(rows))
}

/// reads a table that must exist in the feed.
pub fn read_required_table<T: DeserializeOwned>(
    feed_directory: &Path,
    table: GtfsTable,
    warnings: &mut Vec<GtfsGoWarning>,
) -> Result<Vec<TableRow<T>>, GtfsGoError> {
    read_table(feed_directory, table, warnings)?.ok_or_else(|| GtfsGoError::MissingTableError {
        table,
        path: table.path_in(feed_directory),
    })
}
