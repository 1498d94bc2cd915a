use serde::{Deserialize, Serialize};

/// one row of result.csv: a raw stop and the canonical stop it was merged into.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StopMappingRow {
    pub stop_id: String,
    pub stop_name: String,
    pub similar_stop_id: String,
    pub similar_stop_name: String,
}
