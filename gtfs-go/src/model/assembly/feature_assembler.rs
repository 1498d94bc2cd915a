use geo::{LineString, Point};
use geojson::{feature::Id, Feature, FeatureCollection, JsonObject};
use itertools::Itertools;
use serde_json::json;

use crate::model::{
    assembly::{AssembledFeatures, AssemblyOptions, StopMappingRow},
    feed::{FeedStore, Route},
    frequency::{FrequencyEngine, FrequencyRecord},
    geometry::GeometryBuilder,
    interpolation::StopGrouping,
    GtfsGoWarning,
};

/// turns a loaded feed into route and stop feature collections. features
/// are ordered by id.
pub struct FeatureAssembler<'a> {
    feed: &'a FeedStore,
    geometry: GeometryBuilder<'a>,
}

impl<'a> FeatureAssembler<'a> {
    pub fn new(feed: &'a FeedStore) -> FeatureAssembler<'a> {
        FeatureAssembler {
            feed,
            geometry: GeometryBuilder::new(feed),
        }
    }

    /// route lines and stop points with identity attributes only.
    pub fn assemble_simple(
        &self,
        options: &AssemblyOptions,
        warnings: &mut Vec<GtfsGoWarning>,
    ) -> AssembledFeatures {
        let routes = self
            .route_lines(options, warnings)
            .into_iter()
            .map(|(_, route, line)| line_feature(&route.id, line, self.route_properties(route)))
            .collect_vec();

        let stops = self
            .sorted_stop_indices()
            .into_iter()
            .filter_map(|stop_idx| {
                let route_ids = self.feed.routes_serving_stop(stop_idx);
                if options.ignore_no_route_stops && route_ids.is_empty() {
                    return None;
                }
                let stop = &self.feed.stops()[stop_idx];
                let mut properties = JsonObject::new();
                properties.insert(String::from("stop_id"), json![stop.id]);
                properties.insert(String::from("stop_name"), json![stop.name]);
                properties.insert(String::from("route_ids"), json![route_ids]);
                Some(point_feature(&stop.id, self.geometry.stop_geometry(stop), properties))
            })
            .collect_vec();

        AssembledFeatures {
            routes: collection(routes),
            stops: collection(stops),
            stop_mapping: None,
        }
    }

    /// route lines with departure counts, one point per canonical stop group
    /// with the group's counts, and the raw stop to group mapping.
    pub fn assemble_frequency(
        &self,
        engine: &FrequencyEngine,
        grouping: &StopGrouping,
        options: &AssemblyOptions,
        warnings: &mut Vec<GtfsGoWarning>,
    ) -> AssembledFeatures {
        let routes = self
            .route_lines(options, warnings)
            .into_iter()
            .map(|(route_idx, route, line)| {
                let mut properties = self.route_properties(route);
                add_frequency(&mut properties, &engine.route_frequency(route_idx));
                line_feature(&route.id, line, properties)
            })
            .collect_vec();

        let stops = grouping
            .groups()
            .iter()
            .map(|group| {
                let frequency = engine.group_frequency(&group.id, &group.stop_indices);
                let mut properties = JsonObject::new();
                properties.insert(String::from("similar_stop_id"), json![group.id]);
                properties.insert(String::from("similar_stop_name"), json![group.name]);
                properties.insert(String::from("stop_ids"), json![group.stop_ids]);
                add_frequency(&mut properties, &frequency);
                point_feature(&group.id, group.centroid, properties)
            })
            .collect_vec();

        let stop_mapping = self
            .sorted_stop_indices()
            .into_iter()
            .filter_map(|stop_idx| {
                let stop = &self.feed.stops()[stop_idx];
                let group = grouping.group_of(&stop.id)?;
                Some(StopMappingRow {
                    stop_id: stop.id.clone(),
                    stop_name: stop.name.clone(),
                    similar_stop_id: group.id.clone(),
                    similar_stop_name: group.name.clone(),
                })
            })
            .collect_vec();

        AssembledFeatures {
            routes: collection(routes),
            stops: collection(stops),
            stop_mapping: Some(stop_mapping),
        }
    }

    /// each route with a drawable line, sorted by route id.
    fn route_lines(
        &self,
        options: &AssemblyOptions,
        warnings: &mut Vec<GtfsGoWarning>,
    ) -> Vec<(usize, &'a Route, LineString<f64>)> {
        let feed: &'a FeedStore = self.feed;
        feed.routes()
            .iter()
            .enumerate()
            .sorted_by(|(_, a), (_, b)| a.id.cmp(&b.id))
            .filter_map(|(route_idx, route)| {
                self.geometry
                    .route_geometry(route_idx, options.use_shapes, warnings)
                    .map(|line| (route_idx, route, line))
            })
            .collect_vec()
    }

    fn route_properties(&self, route: &Route) -> JsonObject {
        let mut properties = JsonObject::new();
        properties.insert(String::from("route_id"), json![route.id]);
        properties.insert(String::from("route_name"), json![route.display_name()]);
        properties.insert(String::from("route_short_name"), json![route.short_name]);
        properties.insert(String::from("route_long_name"), json![route.long_name]);
        properties.insert(String::from("route_type"), json![route.route_type]);
        properties.insert(String::from("route_color"), json![route.color]);
        properties.insert(String::from("route_text_color"), json![route.text_color]);
        let agency_id = self.feed.agency_id(route);
        properties.insert(String::from("agency_id"), json![agency_id]);
        properties.insert(
            String::from("agency_name"),
            json![self.feed.agency_name(agency_id)],
        );
        properties
    }

    fn sorted_stop_indices(&self) -> Vec<usize> {
        let stops = self.feed.stops();
        (0..stops.len())
            .sorted_by(|a, b| stops[*a].id.cmp(&stops[*b].id))
            .collect_vec()
    }
}

fn add_frequency(properties: &mut JsonObject, frequency: &FrequencyRecord) {
    properties.insert(String::from("count"), json![frequency.count]);
    properties.insert(
        String::from("headway_class"),
        json![frequency.headway_class.as_str()],
    );
}

fn line_feature(id: &str, line: LineString<f64>, properties: JsonObject) -> Feature {
    feature(id, geojson::Geometry::from(&geo::Geometry::LineString(line)), properties)
}

fn point_feature(id: &str, point: Point<f64>, properties: JsonObject) -> Feature {
    feature(id, geojson::Geometry::from(&geo::Geometry::Point(point)), properties)
}

fn feature(id: &str, geometry: geojson::Geometry, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: Some(Id::String(id.to_string())),
        properties: Some(properties),
        foreign_members: None,
    }
}

fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
