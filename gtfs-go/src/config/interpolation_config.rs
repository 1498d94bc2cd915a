use serde::{Deserialize, Serialize};

/// tunables for merging near-duplicate stops in frequency mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InterpolationConfig {
    /// minimum Dice similarity of normalized stop names, in [0, 1]. the
    /// default of 1.0 only accepts identical normalized names.
    pub name_similarity_threshold: f64,
    /// maximum haversine distance between two stops of one group
    pub distance_threshold_meters: f64,
    /// join every stop with its parent station when the two lie within
    /// `distance_threshold_meters`
    pub merge_parent_stations: bool,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            name_similarity_threshold: 1.0,
            distance_threshold_meters: 300.0,
            merge_parent_stations: true,
        }
    }
}
