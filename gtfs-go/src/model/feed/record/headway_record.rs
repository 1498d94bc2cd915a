use serde::Deserialize;

/// a single row from frequencies.txt: the trip runs every `headway_secs`
/// between `start_time` (inclusive) and `end_time` (exclusive).
#[derive(Debug, Clone, Deserialize)]
pub struct HeadwayRecord {
    pub trip_id: String,
    pub start_time: String,
    pub end_time: String,
    pub headway_secs: u32,
}
