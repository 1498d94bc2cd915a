use geo::Point;

/// a stop with resolved WGS84 coordinates. the point is stored as (lon, lat).
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: String,
    pub name: String,
    pub coord: Point<f64>,
    pub parent_station: Option<String>,
}

impl Stop {
    pub fn lon(&self) -> f64 {
        self.coord.x()
    }

    pub fn lat(&self) -> f64 {
        self.coord.y()
    }
}

/// true when the pair is a valid WGS84 coordinate.
pub fn is_valid_wgs84(lon: f64, lat: f64) -> bool {
    lon.is_finite() && lat.is_finite() && (-180.0..=180.0).contains(&lon) && (-90.0..=90.0).contains(&lat)
}
