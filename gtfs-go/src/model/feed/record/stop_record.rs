use serde::Deserialize;

/// a single row from stops.txt. coordinates are optional here because GTFS
/// allows entrances, generic nodes and boarding areas to inherit the location
/// of their parent station.
#[derive(Debug, Clone, Deserialize)]
pub struct StopRecord {
    pub stop_id: String,
    #[serde(default)]
    pub stop_name: Option<String>,
    #[serde(default)]
    pub stop_lat: Option<f64>,
    #[serde(default)]
    pub stop_lon: Option<f64>,
    #[serde(default)]
    pub parent_station: Option<String>,
}
