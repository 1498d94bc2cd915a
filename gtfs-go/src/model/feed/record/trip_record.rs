use serde::Deserialize;

/// a single row from trips.txt
#[derive(Debug, Clone, Deserialize)]
pub struct TripRecord {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    #[serde(default)]
    pub shape_id: Option<String>,
}
