use serde::Deserialize;

/// a single row from agency.txt
#[derive(Debug, Clone, Deserialize)]
pub struct AgencyRecord {
    /// optional when the feed has a single agency
    #[serde(default)]
    pub agency_id: Option<String>,
    pub agency_name: String,
}
