use serde::Deserialize;

/// a single point row from shapes.txt
#[derive(Debug, Clone, Deserialize)]
pub struct ShapeRecord {
    pub shape_id: String,
    pub shape_pt_lat: f64,
    pub shape_pt_lon: f64,
    pub shape_pt_sequence: u32,
}
