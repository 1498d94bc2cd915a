use serde::Serialize;

use crate::model::feed::GtfsTable;

/// recoverable conditions found while loading or transforming a feed.
/// these are returned alongside a successful result so that partial output
/// can still be reported.
#[derive(thiserror::Error, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum GtfsGoWarning {
    #[error("{table} line {line}: skipped malformed row: {message}")]
    MalformedRow {
        table: GtfsTable,
        line: u64,
        message: String,
    },
    #[error("{table} line {line}: duplicate id '{id}' ignored")]
    DuplicateId {
        table: GtfsTable,
        line: u64,
        id: String,
    },
    #[error("trip '{trip_id}' has stop times that decrease along its stop sequence")]
    NonMonotonicTrip { trip_id: String },
    #[error("route '{route_id}' has no trips and was dropped")]
    UnusedRoute { route_id: String },
    #[error("route '{route_id}': shapes requested but unavailable, using stop sequence geometry")]
    GeometryFallback { route_id: String },
    #[error("route '{route_id}' has fewer than two distinct points and was not rendered")]
    DegenerateGeometry { route_id: String },
    #[error("{0}")]
    EmptyResult(String),
}
