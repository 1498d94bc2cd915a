use serde::Deserialize;

use crate::model::feed::gtfs_time;

/// a single row from stop_times.txt. times are kept as text here and parsed
/// by [`StopTimeRecord::event_times`] so that values past 24:00:00 survive.
#[derive(Debug, Clone, Deserialize)]
pub struct StopTimeRecord {
    pub trip_id: String,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    pub stop_id: String,
    pub stop_sequence: u32,
}

impl StopTimeRecord {
    /// returns (arrival, departure) in seconds since service day start. when
    /// only one of the two is listed it stands in for the other. a row with
    /// neither is malformed for our purposes.
    pub fn event_times(&self) -> Result<(u32, u32), String> {
        let arrival = gtfs_time::parse_optional_gtfs_time(self.arrival_time.as_deref())?;
        let departure = gtfs_time::parse_optional_gtfs_time(self.departure_time.as_deref())?;
        match (arrival, departure) {
            (Some(a), Some(d)) => Ok((a, d)),
            (Some(a), None) => Ok((a, a)),
            (None, Some(d)) => Ok((d, d)),
            (None, None) => Err(format!(
                "stop time for trip '{}' at sequence {} is missing both arrival and departure time",
                self.trip_id, self.stop_sequence
            )),
        }
    }
}
