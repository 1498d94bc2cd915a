use geo::Point;

/// near-duplicate stops merged under one representative identity.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalStopGroup {
    /// the lexicographically smallest member stop id
    pub id: String,
    /// name of the representative stop
    pub name: String,
    /// member stop ids, sorted
    pub stop_ids: Vec<String>,
    /// member positions in the stop arena, in `stop_ids` order
    pub stop_indices: Vec<usize>,
    /// mean of the member coordinates
    pub centroid: Point<f64>,
}
