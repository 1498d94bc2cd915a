use std::collections::HashMap;

use geo::{Distance, Haversine, Point};
use itertools::Itertools;
use kdam::tqdm;
use rstar::{primitives::GeomWithData, RTree, AABB};

use crate::{
    algorithm::{name_similarity, DisjointSet},
    config::InterpolationConfig,
    model::{
        feed::Stop,
        interpolation::{CanonicalStopGroup, StopGrouping},
    },
};

type StopPoint = GeomWithData<[f64; 2], usize>;

/// metres spanned by one degree of latitude
const METERS_PER_DEGREE: f64 = 111_320.0;

/// merges stops that share a name and sit close together into canonical
/// stop groups.
///
/// two stops are candidates when their name keys are equal or their Dice
/// similarity reaches the configured threshold, and they are within the
/// configured haversine distance. candidates are joined with a union-find,
/// so grouping is transitive: a stop can join a group through a neighbor it
/// does not itself match. stops whose name key is empty never match by name.
/// each stop is also joined with its parent station when configured and the
/// parent lies within the distance threshold.
pub struct StopInterpolator<'a> {
    config: &'a InterpolationConfig,
    delimiter: Option<&'a str>,
}

impl<'a> StopInterpolator<'a> {
    /// `delimiter` cuts stop names before comparison, see
    /// [`name_similarity::stop_name_key`].
    pub fn new(config: &'a InterpolationConfig, delimiter: Option<&'a str>) -> StopInterpolator<'a> {
        StopInterpolator { config, delimiter }
    }

    pub fn group_stops(&self, stops: &[Stop]) -> StopGrouping {
        let keys = stops
            .iter()
            .map(|s| name_similarity::stop_name_key(&s.name, self.delimiter))
            .collect_vec();
        let rtree: RTree<StopPoint> = RTree::bulk_load(
            stops
                .iter()
                .enumerate()
                .map(|(idx, s)| GeomWithData::new([s.lon(), s.lat()], idx))
                .collect_vec(),
        );

        let mut sets = DisjointSet::new(stops.len());
        let iter = tqdm!(stops.iter().enumerate(), total = stops.len(), desc = "stop interpolation");
        for (idx, stop) in iter {
            let envelope = self.search_envelope(stop);
            for candidate in rtree.locate_in_envelope(&envelope) {
                let other = candidate.data;
                if other <= idx || sets.same_set(idx, other) {
                    continue;
                }
                if self.names_match(&keys[idx], &keys[other])
                    && self.within_distance(stop, &stops[other])
                {
                    sets.union(idx, other);
                }
            }
        }
        eprintln!();

        if self.config.merge_parent_stations {
            let positions: HashMap<&str, usize> = stops
                .iter()
                .enumerate()
                .map(|(idx, s)| (s.id.as_str(), idx))
                .collect();
            for (idx, stop) in stops.iter().enumerate() {
                let parent = stop
                    .parent_station
                    .as_deref()
                    .and_then(|p| positions.get(p));
                match parent {
                    Some(parent_idx) if self.within_distance(stop, &stops[*parent_idx]) => {
                        sets.union(idx, *parent_idx);
                    }
                    Some(parent_idx) => log::debug!(
                        "stop {} is too far from parent station {} to merge",
                        stop.id,
                        stops[*parent_idx].id
                    ),
                    None => {}
                }
            }
        }

        let groups = sets
            .sets()
            .into_iter()
            .map(|members| build_group(stops, members))
            .collect_vec();
        log::info!("grouped {} stops into {} canonical stops", stops.len(), groups.len());
        StopGrouping::new(groups)
    }

    fn names_match(&self, a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        a == b || name_similarity::dice_similarity(a, b) >= self.config.name_similarity_threshold
    }

    fn within_distance(&self, a: &Stop, b: &Stop) -> bool {
        Haversine.distance(a.coord, b.coord) <= self.config.distance_threshold_meters
    }

    /// a lon/lat box enclosing every point within the distance threshold of
    /// the stop. the box does not wrap across the antimeridian.
    fn search_envelope(&self, stop: &Stop) -> AABB<[f64; 2]> {
        // pad the box so that rounding never drops a point on the boundary
        let meters = self.config.distance_threshold_meters * 1.01 + 1.0;
        let dlat = meters / METERS_PER_DEGREE;
        let cos_lat = stop.lat().to_radians().cos().max(1e-6);
        let dlon = (meters / (METERS_PER_DEGREE * cos_lat)).min(360.0);
        AABB::from_corners(
            [stop.lon() - dlon, stop.lat() - dlat],
            [stop.lon() + dlon, stop.lat() + dlat],
        )
    }
}

/// the representative is the member with the smallest id.
fn build_group(stops: &[Stop], members: Vec<usize>) -> CanonicalStopGroup {
    let members = members
        .into_iter()
        .sorted_by(|a, b| stops[*a].id.cmp(&stops[*b].id))
        .collect_vec();
    let representative = &stops[members[0]];
    let n = members.len() as f64;
    let (sum_x, sum_y) = members.iter().fold((0.0, 0.0), |(x, y), idx| {
        (x + stops[*idx].lon(), y + stops[*idx].lat())
    });
    CanonicalStopGroup {
        id: representative.id.clone(),
        name: representative.name.clone(),
        stop_ids: members.iter().map(|idx| stops[*idx].id.clone()).collect(),
        stop_indices: members,
        centroid: Point::new(sum_x / n, sum_y / n),
    }
}
