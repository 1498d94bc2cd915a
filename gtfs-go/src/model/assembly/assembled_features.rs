use geojson::FeatureCollection;

use crate::model::assembly::StopMappingRow;

/// the GeoJSON layers of one run, plus the stop mapping table of a
/// frequency run.
#[derive(Debug, Clone)]
pub struct AssembledFeatures {
    pub routes: FeatureCollection,
    pub stops: FeatureCollection,
    pub stop_mapping: Option<Vec<StopMappingRow>>,
}
