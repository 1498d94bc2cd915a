use geo::{Coord, LineString, Point};
use itertools::Itertools;

use crate::model::{
    feed::{FeedStore, Stop, Trip},
    GtfsGoWarning,
};

/// produces route lines and stop points from a loaded feed.
pub struct GeometryBuilder<'a> {
    feed: &'a FeedStore,
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(feed: &'a FeedStore) -> GeometryBuilder<'a> {
        GeometryBuilder { feed }
    }

    /// the line drawn for the route at arena position `route_idx`.
    ///
    /// with `use_shapes`, the representative trip's shape is used, or else the
    /// first trip (by id) whose shape is known. without a usable shape, the
    /// representative trip's stops are joined in sequence order, and a
    /// [`GtfsGoWarning::GeometryFallback`] is recorded if shapes were asked for.
    /// returns `None` with a [`GtfsGoWarning::DegenerateGeometry`] when the
    /// line has fewer than two distinct points.
    pub fn route_geometry(
        &self,
        route_idx: usize,
        use_shapes: bool,
        warnings: &mut Vec<GtfsGoWarning>,
    ) -> Option<LineString<f64>> {
        let route_id = self.feed.routes().get(route_idx)?.id.clone();
        let representative = self.representative_trip(route_idx);

        if use_shapes {
            match self.shape_line(route_idx, representative) {
                Some(line) => return Some(line),
                None => warnings.push(GtfsGoWarning::GeometryFallback {
                    route_id: route_id.clone(),
                }),
            }
        }

        let coords = representative
            .map(|trip| {
                trip.stop_times
                    .iter()
                    .map(|st| self.feed.stops()[st.stop_index].coord.0)
                    .collect_vec()
            })
            .unwrap_or_default();
        let line = dedup_coords(coords);
        if line.0.len() < 2 {
            warnings.push(GtfsGoWarning::DegenerateGeometry { route_id });
            return None;
        }
        Some(line)
    }

    /// a stop is drawn at its own coordinates.
    pub fn stop_geometry(&self, stop: &Stop) -> Point<f64> {
        stop.coord
    }

    /// the trip with the most stop times, ties going to the smallest trip id.
    pub fn representative_trip(&self, route_idx: usize) -> Option<&'a Trip> {
        let feed: &'a FeedStore = self.feed;
        feed.trips_of_route(route_idx).min_by(|a, b| {
            b.stop_times
                .len()
                .cmp(&a.stop_times.len())
                .then_with(|| a.id.cmp(&b.id))
        })
    }

    fn shape_line(&self, route_idx: usize, representative: Option<&Trip>) -> Option<LineString<f64>> {
        let usable = |shape_id: &str| {
            self.feed
                .shape(shape_id)
                .map(|line| dedup_coords(line.0.clone()))
                .filter(|line| line.0.len() >= 2)
        };
        if let Some(line) = representative
            .and_then(|t| t.shape_id.as_deref())
            .and_then(usable)
        {
            return Some(line);
        }
        self.feed
            .trips_of_route(route_idx)
            .sorted_by(|a, b| a.id.cmp(&b.id))
            .filter_map(|t| t.shape_id.as_deref())
            .find_map(usable)
    }
}

/// collapses runs of identical consecutive points.
fn dedup_coords(coords: Vec<Coord<f64>>) -> LineString<f64> {
    LineString::new(coords.into_iter().dedup().collect_vec())
}
