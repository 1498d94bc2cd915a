use std::{
    collections::{hash_map::Entry, HashMap},
    path::{Path, PathBuf},
};

use geo::{Coord, LineString, Point};
use itertools::Itertools;

use crate::model::{
    calendar::Service,
    feed::{
        agency::Agency,
        gtfs_time,
        record::{
            AgencyRecord, CalendarDateRecord, CalendarRecord, HeadwayRecord, RouteRecord,
            ShapeRecord, StopRecord, StopTimeRecord, TripRecord,
        },
        route::Route,
        stop::{self, Stop},
        table_reader::{read_required_table, read_table, TableRow},
        trip::{HeadwayEntry, StopTime, Trip},
        GtfsTable,
    },
    GtfsGoError, GtfsGoWarning,
};

/// the in-memory, id-indexed representation of one GTFS feed.
///
/// entities live in arena vectors. id lookups and the reverse indices
/// (route -> trips, stop -> trips) are built once at load time and refer to
/// arena positions. a trip owns its stop times in stop_sequence order.
#[derive(Debug)]
pub struct FeedStore {
    feed_directory: PathBuf,
    agencies: Vec<Agency>,
    routes: Vec<Route>,
    trips: Vec<Trip>,
    stops: Vec<Stop>,
    services: Vec<Service>,
    shapes: HashMap<String, LineString<f64>>,
    route_index: HashMap<String, usize>,
    trip_index: HashMap<String, usize>,
    stop_index: HashMap<String, usize>,
    route_trips: Vec<Vec<usize>>,
    stop_trips: Vec<Vec<usize>>,
    warnings: Vec<GtfsGoWarning>,
}

impl FeedStore {
    /// loads every table of the feed found in `feed_directory`.
    ///
    /// fails if a required table is missing. malformed rows are skipped and
    /// reported through [`FeedStore::warnings`].
    pub fn load(feed_directory: &Path) -> Result<FeedStore, GtfsGoError> {
        if !feed_directory.is_dir() {
            return Err(GtfsGoError::FeedDirectoryError(feed_directory.to_path_buf()));
        }
        log::info!("loading GTFS feed from {feed_directory:?}");
        let mut warnings: Vec<GtfsGoWarning> = vec![];

        let agency_rows: Vec<TableRow<AgencyRecord>> =
            read_table(feed_directory, GtfsTable::Agency, &mut warnings)?.unwrap_or_default();
        let route_rows: Vec<TableRow<RouteRecord>> =
            read_required_table(feed_directory, GtfsTable::Routes, &mut warnings)?;
        let stop_rows: Vec<TableRow<StopRecord>> =
            read_required_table(feed_directory, GtfsTable::Stops, &mut warnings)?;
        let calendar_rows: Option<Vec<TableRow<CalendarRecord>>> =
            read_table(feed_directory, GtfsTable::Calendar, &mut warnings)?;
        let calendar_date_rows: Option<Vec<TableRow<CalendarDateRecord>>> =
            read_table(feed_directory, GtfsTable::CalendarDates, &mut warnings)?;
        if calendar_rows.is_none() && calendar_date_rows.is_none() {
            return Err(GtfsGoError::MissingTableError {
                table: GtfsTable::Calendar,
                path: GtfsTable::Calendar.path_in(feed_directory),
            });
        }
        let trip_rows: Vec<TableRow<TripRecord>> =
            read_required_table(feed_directory, GtfsTable::Trips, &mut warnings)?;
        let stop_time_rows: Vec<TableRow<StopTimeRecord>> =
            read_required_table(feed_directory, GtfsTable::StopTimes, &mut warnings)?;
        let headway_rows: Vec<TableRow<HeadwayRecord>> =
            read_table(feed_directory, GtfsTable::Frequencies, &mut warnings)?.unwrap_or_default();
        let shape_rows: Vec<TableRow<ShapeRecord>> =
            read_table(feed_directory, GtfsTable::Shapes, &mut warnings)?.unwrap_or_default();

        let agencies = agency_rows.into_iter().map(|(_, r)| Agency::from(r)).collect_vec();
        let (stops, stop_index) = build_stops(stop_rows, &mut warnings);
        let (services, service_index) = build_services(
            calendar_rows.unwrap_or_default(),
            calendar_date_rows.unwrap_or_default(),
            &mut warnings,
        );
        let (candidate_routes, candidate_route_index) = build_routes(route_rows, &mut warnings);
        let (mut trips, trip_index) = build_trips(
            trip_rows,
            &candidate_route_index,
            &service_index,
            &mut warnings,
        );
        attach_stop_times(stop_time_rows, &mut trips, &trip_index, &stop_index, &mut warnings);
        attach_headways(headway_rows, &mut trips, &trip_index, &mut warnings);
        let shapes = build_shapes(shape_rows, &mut warnings);

        // routes are kept only when at least one trip runs on them
        let mut trips_by_route: HashMap<&str, Vec<usize>> = HashMap::new();
        for (idx, trip) in trips.iter().enumerate() {
            trips_by_route.entry(trip.route_id.as_str()).or_default().push(idx);
        }
        let mut routes: Vec<Route> = vec![];
        let mut route_trips: Vec<Vec<usize>> = vec![];
        for route in candidate_routes.into_iter() {
            match trips_by_route.remove(route.id.as_str()) {
                Some(trip_indices) => {
                    routes.push(route);
                    route_trips.push(trip_indices);
                }
                None => warnings.push(GtfsGoWarning::UnusedRoute { route_id: route.id }),
            }
        }
        let route_index: HashMap<String, usize> = routes
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.id.clone(), idx))
            .collect();

        let mut stop_trips: Vec<Vec<usize>> = vec![vec![]; stops.len()];
        for (trip_idx, trip) in trips.iter().enumerate() {
            for stop_time in trip.stop_times.iter() {
                stop_trips[stop_time.stop_index].push(trip_idx);
            }
        }
        for serving in stop_trips.iter_mut() {
            serving.dedup();
        }

        log::info!(
            "loaded {} routes, {} trips, {} stops, {} services, {} shapes with {} warnings",
            routes.len(),
            trips.len(),
            stops.len(),
            services.len(),
            shapes.len(),
            warnings.len()
        );

        Ok(FeedStore {
            feed_directory: feed_directory.to_path_buf(),
            agencies,
            routes,
            trips,
            stops,
            services,
            shapes,
            route_index,
            trip_index,
            stop_index,
            route_trips,
            stop_trips,
            warnings,
        })
    }

    pub fn feed_directory(&self) -> &Path {
        &self.feed_directory
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// recoverable problems found while loading
    pub fn warnings(&self) -> &[GtfsGoWarning] {
        &self.warnings
    }

    pub fn route(&self, route_id: &str) -> Option<&Route> {
        self.route_index.get(route_id).map(|idx| &self.routes[*idx])
    }

    pub fn trip(&self, trip_id: &str) -> Option<&Trip> {
        self.trip_index.get(trip_id).map(|idx| &self.trips[*idx])
    }

    pub fn stop(&self, stop_id: &str) -> Option<&Stop> {
        self.stop_index.get(stop_id).map(|idx| &self.stops[*idx])
    }

    pub fn stop_position(&self, stop_id: &str) -> Option<usize> {
        self.stop_index.get(stop_id).copied()
    }

    /// trips running on the route at arena position `route_idx`
    pub fn trips_of_route(&self, route_idx: usize) -> impl Iterator<Item = &Trip> + '_ {
        self.route_trips
            .get(route_idx)
            .into_iter()
            .flatten()
            .map(|trip_idx| &self.trips[*trip_idx])
    }

    /// trips calling at the stop at arena position `stop_idx`
    pub fn trips_serving_stop(&self, stop_idx: usize) -> impl Iterator<Item = &Trip> + '_ {
        self.stop_trips
            .get(stop_idx)
            .into_iter()
            .flatten()
            .map(|trip_idx| &self.trips[*trip_idx])
    }

    /// sorted, distinct ids of the routes calling at a stop
    pub fn routes_serving_stop(&self, stop_idx: usize) -> Vec<&str> {
        self.trips_serving_stop(stop_idx)
            .map(|t| t.route_id.as_str())
            .sorted()
            .dedup()
            .collect_vec()
    }

    pub fn shape(&self, shape_id: &str) -> Option<&LineString<f64>> {
        self.shapes.get(shape_id)
    }

    pub fn has_shapes(&self) -> bool {
        !self.shapes.is_empty()
    }

    /// the agency name for a route. a route without agency_id belongs to the
    /// only agency of a single-agency feed.
    pub fn agency_name(&self, agency_id: Option<&str>) -> Option<&str> {
        match agency_id {
            Some(id) => self
                .agencies
                .iter()
                .find(|a| a.id.as_deref() == Some(id))
                .map(|a| a.name.as_str()),
            None if self.agencies.len() == 1 => Some(self.agencies[0].name.as_str()),
            None => None,
        }
    }

    /// the agency id for a route, falling back to the only agency of a
    /// single-agency feed.
    pub fn agency_id<'a>(&'a self, route: &'a Route) -> Option<&'a str> {
        match (&route.agency_id, self.agencies.as_slice()) {
            (Some(id), _) => Some(id.as_str()),
            (None, [only]) => only.id.as_deref(),
            (None, _) => None,
        }
    }
}

/// resolves stop coordinates. a stop without coordinates inherits those of
/// its parent station, looking only one level up.
fn build_stops(
    rows: Vec<TableRow<StopRecord>>,
    warnings: &mut Vec<GtfsGoWarning>,
) -> (Vec<Stop>, HashMap<String, usize>) {
    let records = dedup_rows(rows, GtfsTable::Stops, |r| r.stop_id.clone(), warnings);
    let coords_by_id: HashMap<&str, (f64, f64)> = records
        .iter()
        .filter_map(|(_, r)| match (r.stop_lon, r.stop_lat) {
            (Some(lon), Some(lat)) => Some((r.stop_id.as_str(), (lon, lat))),
            _ => None,
        })
        .collect();

    let mut stops: Vec<Stop> = vec![];
    for (line, record) in records.iter() {
        let parent_station = record.parent_station.clone().filter(|p| !p.is_empty());
        let coord = match (record.stop_lon, record.stop_lat) {
            (Some(lon), Some(lat)) => Some((lon, lat)),
            _ => parent_station
                .as_deref()
                .and_then(|parent| coords_by_id.get(parent).copied()),
        };
        let Some((lon, lat)) = coord else {
            warnings.push(GtfsGoWarning::MalformedRow {
                table: GtfsTable::Stops,
                line: *line,
                message: format!(
                    "stop '{}' has no coordinates and no parent station location",
                    record.stop_id
                ),
            });
            continue;
        };
        if !stop::is_valid_wgs84(lon, lat) {
            warnings.push(GtfsGoWarning::MalformedRow {
                table: GtfsTable::Stops,
                line: *line,
                message: format!("stop '{}' has invalid coordinates ({lon}, {lat})", record.stop_id),
            });
            continue;
        }
        stops.push(Stop {
            id: record.stop_id.clone(),
            name: record.stop_name.clone().unwrap_or_default(),
            coord: Point::new(lon, lat),
            parent_station,
        });
    }
    let index = stops
        .iter()
        .enumerate()
        .map(|(idx, s)| (s.id.clone(), idx))
        .collect();
    (stops, index)
}

fn build_services(
    calendar_rows: Vec<TableRow<CalendarRecord>>,
    calendar_date_rows: Vec<TableRow<CalendarDateRecord>>,
    warnings: &mut Vec<GtfsGoWarning>,
) -> (Vec<Service>, HashMap<String, usize>) {
    let mut services: Vec<Service> = vec![];
    let mut index: HashMap<String, usize> = HashMap::new();
    for (line, record) in dedup_rows(calendar_rows, GtfsTable::Calendar, |r| r.service_id.clone(), warnings) {
        if record.end_date < record.start_date {
            warnings.push(GtfsGoWarning::MalformedRow {
                table: GtfsTable::Calendar,
                line,
                message: format!("service '{}' ends before it starts", record.service_id),
            });
            continue;
        }
        let mut service = Service::new(&record.service_id);
        service.set_weekly_pattern(record.weekdays(), record.start_date, record.end_date);
        index.insert(record.service_id.clone(), services.len());
        services.push(service);
    }
    for (_, record) in calendar_date_rows.into_iter() {
        let idx = match index.entry(record.service_id.clone()) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                services.push(Service::new(&record.service_id));
                *e.insert(services.len() - 1)
            }
        };
        services[idx].add_exception(record.date, record.exception_type);
    }
    (services, index)
}

fn build_routes(
    rows: Vec<TableRow<RouteRecord>>,
    warnings: &mut Vec<GtfsGoWarning>,
) -> (Vec<Route>, HashMap<String, usize>) {
    let routes = dedup_rows(rows, GtfsTable::Routes, |r| r.route_id.clone(), warnings)
        .into_iter()
        .map(|(_, r)| Route::from(r))
        .collect_vec();
    let index = routes
        .iter()
        .enumerate()
        .map(|(idx, r)| (r.id.clone(), idx))
        .collect();
    (routes, index)
}

fn build_trips(
    rows: Vec<TableRow<TripRecord>>,
    route_index: &HashMap<String, usize>,
    service_index: &HashMap<String, usize>,
    warnings: &mut Vec<GtfsGoWarning>,
) -> (Vec<Trip>, HashMap<String, usize>) {
    let mut trips: Vec<Trip> = vec![];
    for (line, record) in dedup_rows(rows, GtfsTable::Trips, |r| r.trip_id.clone(), warnings) {
        let dangling = if !route_index.contains_key(&record.route_id) {
            Some(format!("unknown route_id '{}'", record.route_id))
        } else if !service_index.contains_key(&record.service_id) {
            Some(format!("unknown service_id '{}'", record.service_id))
        } else {
            None
        };
        if let Some(message) = dangling {
            warnings.push(GtfsGoWarning::MalformedRow {
                table: GtfsTable::Trips,
                line,
                message: format!("trip '{}' has {message}", record.trip_id),
            });
            continue;
        }
        trips.push(Trip {
            id: record.trip_id,
            route_id: record.route_id,
            service_id: record.service_id,
            shape_id: record.shape_id.filter(|s| !s.is_empty()),
            stop_times: vec![],
            headways: vec![],
        });
    }
    let index = trips
        .iter()
        .enumerate()
        .map(|(idx, t)| (t.id.clone(), idx))
        .collect();
    (trips, index)
}

fn attach_stop_times(
    rows: Vec<TableRow<StopTimeRecord>>,
    trips: &mut [Trip],
    trip_index: &HashMap<String, usize>,
    stop_index: &HashMap<String, usize>,
    warnings: &mut Vec<GtfsGoWarning>,
) {
    let malformed = |line: u64, message: String| GtfsGoWarning::MalformedRow {
        table: GtfsTable::StopTimes,
        line,
        message,
    };
    for (line, record) in rows.into_iter() {
        let Some(trip_idx) = trip_index.get(&record.trip_id) else {
            warnings.push(malformed(line, format!("unknown trip_id '{}'", record.trip_id)));
            continue;
        };
        let Some(stop_idx) = stop_index.get(&record.stop_id) else {
            warnings.push(malformed(line, format!("unknown stop_id '{}'", record.stop_id)));
            continue;
        };
        match record.event_times() {
            Ok((arrival_time, departure_time)) => trips[*trip_idx].stop_times.push(StopTime {
                stop_index: *stop_idx,
                stop_sequence: record.stop_sequence,
                arrival_time,
                departure_time,
            }),
            Err(message) => warnings.push(malformed(line, message)),
        }
    }

    for trip in trips.iter_mut() {
        trip.stop_times.sort_by_key(|st| st.stop_sequence);
        if !trip.is_monotonic() {
            warnings.push(GtfsGoWarning::NonMonotonicTrip {
                trip_id: trip.id.clone(),
            });
        }
    }
}

fn attach_headways(
    rows: Vec<TableRow<HeadwayRecord>>,
    trips: &mut [Trip],
    trip_index: &HashMap<String, usize>,
    warnings: &mut Vec<GtfsGoWarning>,
) {
    for (line, record) in rows.into_iter() {
        let entry = trip_index
            .get(&record.trip_id)
            .ok_or_else(|| format!("unknown trip_id '{}'", record.trip_id))
            .and_then(|trip_idx| {
                let start_time = gtfs_time::parse_gtfs_time(&record.start_time)?;
                let end_time = gtfs_time::parse_gtfs_time(&record.end_time)?;
                if record.headway_secs == 0 || end_time <= start_time {
                    return Err(format!(
                        "invalid headway period {}-{} every {}s",
                        record.start_time, record.end_time, record.headway_secs
                    ));
                }
                let entry = HeadwayEntry {
                    start_time,
                    end_time,
                    headway_secs: record.headway_secs,
                };
                Ok((*trip_idx, entry))
            });
        match entry {
            Ok((trip_idx, entry)) => trips[trip_idx].headways.push(entry),
            Err(message) => warnings.push(GtfsGoWarning::MalformedRow {
                table: GtfsTable::Frequencies,
                line,
                message,
            }),
        }
    }
}

fn build_shapes(
    rows: Vec<TableRow<ShapeRecord>>,
    warnings: &mut Vec<GtfsGoWarning>,
) -> HashMap<String, LineString<f64>> {
    let mut points: HashMap<String, Vec<(u32, Coord<f64>)>> = HashMap::new();
    for (line, record) in rows.into_iter() {
        if !stop::is_valid_wgs84(record.shape_pt_lon, record.shape_pt_lat) {
            warnings.push(GtfsGoWarning::MalformedRow {
                table: GtfsTable::Shapes,
                line,
                message: format!("shape '{}' has an invalid coordinate", record.shape_id),
            });
            continue;
        }
        let coord = Coord {
            x: record.shape_pt_lon,
            y: record.shape_pt_lat,
        };
        points
            .entry(record.shape_id)
            .or_default()
            .push((record.shape_pt_sequence, coord));
    }
    points
        .into_iter()
        .map(|(shape_id, mut pts)| {
            pts.sort_by_key(|(seq, _)| *seq);
            let line = LineString::new(pts.into_iter().map(|(_, c)| c).collect_vec());
            (shape_id, line)
        })
        .collect()
}

/// keeps the first row for each id, reporting later duplicates.
fn dedup_rows<T>(
    rows: Vec<TableRow<T>>,
    table: GtfsTable,
    id_fn: impl Fn(&T) -> String,
    warnings: &mut Vec<GtfsGoWarning>,
) -> Vec<TableRow<T>> {
    let mut seen: HashMap<String, u64> = HashMap::new();
    let mut result = vec![];
    for (line, row) in rows.into_iter() {
        let id = id_fn(&row);
        match seen.entry(id) {
            Entry::Occupied(e) => warnings.push(GtfsGoWarning::DuplicateId {
                table,
                line,
                id: e.key().clone(),
            }),
            Entry::Vacant(e) => {
                e.insert(line);
                result.push((line, row));
            }
        }
    }
    result
}

#[cfg(test)]
mod test {
    use super::FeedStore;
    use crate::model::{
        feed::{test_feed, GtfsTable},
        GtfsGoError, GtfsGoWarning,
    };

    #[test]
    fn test_load_minimal_feed() {
        let dir = test_feed::write_feed("load_minimal", &test_feed::minimal_feed());
        let store = FeedStore::load(&dir).expect("minimal feed should load");
        assert_eq!(store.routes().len(), 1);
        assert_eq!(store.trips().len(), 1);
        assert_eq!(store.stops().len(), 2);
        assert!(store.warnings().is_empty(), "{:?}", store.warnings());

        let trip = store.trip("t1").expect("trip t1");
        let sequence: Vec<&str> = trip
            .stop_times
            .iter()
            .map(|st| store.stops()[st.stop_index].id.as_str())
            .collect();
        assert_eq!(sequence, vec!["s1", "s2"]);
        assert_eq!(store.trips_of_route(0).count(), 1);
        let s2 = store.stop_position("s2").expect("stop s2");
        assert_eq!(store.routes_serving_stop(s2), vec!["r1"]);
        assert_eq!(store.agency_name(None), Some("Harbor Transit"));
    }

    #[test]
    fn test_load_fixture_feed() {
        let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join("minimal_feed");
        let store = FeedStore::load(&dir).expect("fixture feed should load");
        assert_eq!(store.stops().len(), 3);
        assert_eq!(store.services().len(), 1);
        assert!(store.has_shapes());
        let trip = store.trip("t1").expect("trip t1");
        assert_eq!(trip.shape_id.as_deref(), Some("sh1"));
        let christmas = chrono::NaiveDate::from_ymd_opt(2024, 12, 25).expect("date");
        assert!(!store.services()[0].is_active_on(&christmas));
        let depot = store.stop_position("s3").expect("s3");
        assert!(store.routes_serving_stop(depot).is_empty());
    }

    #[test]
    fn test_missing_required_table_is_fatal() {
        let tables = test_feed::minimal_feed()
            .into_iter()
            .filter(|(name, _)| *name != "stop_times.txt")
            .collect::<Vec<_>>();
        let dir = test_feed::write_feed("missing_stop_times", &tables);
        match FeedStore::load(&dir) {
            Err(GtfsGoError::MissingTableError { table, path }) => {
                assert_eq!(table, GtfsTable::StopTimes);
                assert!(path.ends_with("stop_times.txt"));
            }
            other => panic!("expected missing table error, found {other:?}"),
        }
    }

    #[test]
    fn test_missing_both_calendars_is_fatal() {
        let tables = test_feed::minimal_feed()
            .into_iter()
            .filter(|(name, _)| *name != "calendar.txt")
            .collect::<Vec<_>>();
        let dir = test_feed::write_feed("missing_calendar", &tables);
        let result = FeedStore::load(&dir);
        assert!(matches!(
            result,
            Err(GtfsGoError::MissingTableError {
                table: GtfsTable::Calendar,
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_stop_time_is_skipped() {
        let mut tables = test_feed::minimal_feed();
        tables.retain(|(name, _)| *name != "stop_times.txt");
        tables.push((
            "stop_times.txt",
            "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
             t1,08:00:00,08:00:00,s1,1\n\
             t1,,,s2,2\n\
             t1,08:20:00\n",
        ));
        let dir = test_feed::write_feed("malformed_stop_time", &tables);
        let store = FeedStore::load(&dir).expect("load should survive malformed rows");
        let trip = store.trip("t1").expect("trip t1");
        assert_eq!(trip.stop_times.len(), 1);
        let malformed = store
            .warnings()
            .iter()
            .filter(|w| {
                matches!(
                    w,
                    GtfsGoWarning::MalformedRow {
                        table: GtfsTable::StopTimes,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(malformed, 2);
    }

    #[test]
    fn test_malformed_stop_coordinates_and_parent_fallback() {
        let mut tables = test_feed::minimal_feed();
        tables.retain(|(name, _)| *name != "stops.txt");
        tables.push((
            "stops.txt",
            "stop_id,stop_name,stop_lat,stop_lon,parent_station\n\
             s1,Harbor,35.0,139.0,\n\
             s2,Hill,35.01,139.01,\n\
             st,Station,35.02,139.02,\n\
             e1,Entrance,,,st\n\
             bad,Bad,north,139.0,\n\
             far,Far,95.0,139.0,\n",
        ));
        let dir = test_feed::write_feed("stop_coordinates", &tables);
        let store = FeedStore::load(&dir).expect("load");
        let entrance = store.stop("e1").expect("entrance inherits parent location");
        assert_eq!((entrance.lon(), entrance.lat()), (139.02, 35.02));
        assert!(store.stop("bad").is_none());
        assert!(store.stop("far").is_none());
        assert_eq!(store.warnings().len(), 2);
    }

    #[test]
    fn test_unused_route_and_duplicates_are_reported() {
        let mut tables = test_feed::minimal_feed();
        tables.retain(|(name, _)| *name != "routes.txt");
        tables.push((
            "routes.txt",
            "route_id,route_short_name,route_long_name,route_type\n\
             r1,1,Harbor Line,3\n\
             r1,1,Duplicate,3\n\
             r2,2,Ghost Line,3\n",
        ));
        let dir = test_feed::write_feed("unused_route", &tables);
        let store = FeedStore::load(&dir).expect("load");
        assert_eq!(store.routes().len(), 1);
        assert_eq!(
            store.route("r1").map(|r| r.display_name()),
            Some("Harbor Line")
        );
        assert!(store.route("r2").is_none());
        assert!(store.warnings().contains(&GtfsGoWarning::UnusedRoute {
            route_id: String::from("r2")
        }));
        assert!(store
            .warnings()
            .iter()
            .any(|w| matches!(w, GtfsGoWarning::DuplicateId { id, .. } if id == "r1")));
    }

    #[test]
    fn test_shapes_sorted_by_sequence() {
        let mut tables = test_feed::minimal_feed();
        tables.push((
            "shapes.txt",
            "shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence\n\
             sh1,35.01,139.01,3\n\
             sh1,35.0,139.0,1\n\
             sh1,35.005,139.002,2\n",
        ));
        let dir = test_feed::write_feed("shapes_sorted", &tables);
        let store = FeedStore::load(&dir).expect("load");
        let shape = store.shape("sh1").expect("shape sh1");
        let xs: Vec<f64> = shape.coords().map(|c| c.x).collect();
        assert_eq!(xs, vec![139.0, 139.002, 139.01]);
    }
}
