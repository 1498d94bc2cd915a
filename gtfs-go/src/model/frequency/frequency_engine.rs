use std::collections::HashSet;

use crate::{
    config::HeadwayClassTable,
    model::{
        feed::{gtfs_time::SECONDS_PER_DAY, shift_time, FeedStore, StopTime, Trip},
        frequency::{FrequencyRecord, HeadwayClass, TimeWindow},
    },
};

/// one departure of a trip instance: (trip id, run offset, departure time).
type DepartureEvent<'a> = (&'a str, i64, u32);

/// counts departures of active trips within a time window.
///
/// a trip instance is one vehicle run: a scheduled trip, or one headway step
/// of a trip listed in frequencies.txt. a route departure is an instance
/// leaving any of its stops except the last one, where it only arrives. a
/// stop event is an instance calling at a stop. each is a single instant,
/// so counts over disjoint windows add up to the count over their union.
pub struct FrequencyEngine<'a> {
    feed: &'a FeedStore,
    active_services: &'a HashSet<String>,
    window: TimeWindow,
    classes: &'a HeadwayClassTable,
    service_day_end: u32,
}

impl<'a> FrequencyEngine<'a> {
    pub fn new(
        feed: &'a FeedStore,
        active_services: &'a HashSet<String>,
        window: TimeWindow,
        classes: &'a HeadwayClassTable,
    ) -> FrequencyEngine<'a> {
        let service_day_end = feed
            .trips()
            .iter()
            .filter(|t| active_services.contains(&t.service_id))
            .filter_map(|t| {
                let last = t.stop_times.last()?.departure_time;
                let offset = t.instance_offsets().into_iter().max()?;
                Some(shift_time(last, offset))
            })
            .fold(SECONDS_PER_DAY, u32::max);
        FrequencyEngine {
            feed,
            active_services,
            window,
            classes,
            service_day_end,
        }
    }

    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    /// departures of the route at arena position `route_idx`, from any of
    /// the stops its trips call at.
    pub fn route_frequency(&self, route_idx: usize) -> FrequencyRecord {
        let id = self
            .feed
            .routes()
            .get(route_idx)
            .map(|r| r.id.clone())
            .unwrap_or_default();
        let feed: &'a FeedStore = self.feed;
        let mut events: HashSet<DepartureEvent<'a>> = HashSet::new();
        for trip in feed.trips_of_route(route_idx) {
            let onward = trip.stop_times.len().saturating_sub(1);
            self.collect_events(trip, &trip.stop_times[..onward], &mut events);
        }
        self.record(id, events.len())
    }

    /// stop events at the stop at arena position `stop_idx`.
    pub fn stop_frequency(&self, stop_idx: usize) -> FrequencyRecord {
        let id = self
            .feed
            .stops()
            .get(stop_idx)
            .map(|s| s.id.clone())
            .unwrap_or_default();
        let count = self.stop_events(&[stop_idx]).len();
        self.record(id, count)
    }

    /// distinct stop events across all member stops of a group. a vehicle
    /// serving two members at the same instant counts once.
    pub fn group_frequency(&self, group_id: &str, member_indices: &[usize]) -> FrequencyRecord {
        let count = self.stop_events(member_indices).len();
        self.record(group_id.to_string(), count)
    }

    /// events at the given stops that fall in the window.
    fn stop_events(&self, stop_indices: &[usize]) -> HashSet<DepartureEvent<'a>> {
        let feed: &'a FeedStore = self.feed;
        let mut events: HashSet<DepartureEvent<'a>> = HashSet::new();
        for stop_idx in stop_indices.iter() {
            for trip in feed.trips_serving_stop(*stop_idx) {
                let calls = trip
                    .stop_times
                    .iter()
                    .filter(|st| st.stop_index == *stop_idx)
                    .cloned()
                    .collect::<Vec<_>>();
                self.collect_events(trip, &calls, &mut events);
            }
        }
        events
    }

    /// adds every run of `trip` through `calls` that departs inside the
    /// window. inactive trips add nothing.
    fn collect_events(
        &self,
        trip: &'a Trip,
        calls: &[StopTime],
        events: &mut HashSet<DepartureEvent<'a>>,
    ) {
        if !self.active_services.contains(&trip.service_id) {
            return;
        }
        for offset in trip.instance_offsets() {
            for stop_time in calls.iter() {
                let time = shift_time(stop_time.departure_time, offset);
                if self.window.contains(time) {
                    events.insert((trip.id.as_str(), offset, time));
                }
            }
        }
    }

    fn record(&self, id: String, count: usize) -> FrequencyRecord {
        let hours = self.window.hours(self.service_day_end);
        FrequencyRecord {
            id,
            count,
            headway_class: HeadwayClass::classify(count, hours, self.classes),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::FrequencyEngine;
    use crate::{
        config::HeadwayClassTable,
        model::{
            feed::{test_feed, FeedStore},
            frequency::{HeadwayClass, TimeWindow},
        },
    };

    const H: u32 = 3600;

    fn services(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn busy_feed(name: &str) -> FeedStore {
        let tables = test_feed::with_table(
            test_feed::with_table(
                test_feed::minimal_feed(),
                "trips.txt",
                "route_id,service_id,trip_id\n\
                 r1,daily,t1\n\
                 r1,daily,t2\n\
                 r1,daily,t3\n\
                 r1,daily,late\n\
                 r1,daily,loop\n",
            ),
            "stop_times.txt",
            "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
             t1,05:50:00,05:55:00,s1,1\n\
             t1,06:05:00,06:05:00,s2,2\n\
             t2,08:00:00,08:00:00,s1,1\n\
             t2,08:10:00,08:10:00,s2,2\n\
             t3,12:00:00,12:00:00,s1,1\n\
             t3,12:10:00,12:10:00,s2,2\n\
             late,25:00:00,25:00:00,s1,1\n\
             late,25:10:00,25:10:00,s2,2\n\
             loop,09:00:00,09:00:00,s1,1\n\
             loop,09:10:00,09:10:00,s2,2\n\
             loop,09:20:00,09:20:00,s1,3\n",
        );
        let dir = test_feed::write_feed(name, &tables);
        FeedStore::load(&dir).expect("test invariant failed: feed should load")
    }

    #[test]
    fn test_minimal_feed_whole_day() {
        let dir = test_feed::write_feed("frequency_minimal", &test_feed::minimal_feed());
        let feed = FeedStore::load(&dir).expect("load");
        let active = services(&["daily"]);
        let table = HeadwayClassTable::default();
        let engine = FrequencyEngine::new(&feed, &active, TimeWindow::WholeDay, &table);
        let route = engine.route_frequency(0);
        assert_eq!(route.id, "r1");
        assert_eq!(route.count, 1);
        assert_ne!(route.headway_class, HeadwayClass::NoService);
        for stop_idx in 0..feed.stops().len() {
            let stop = engine.stop_frequency(stop_idx);
            assert_eq!(stop.count, 1);
            assert_ne!(stop.headway_class, HeadwayClass::NoService);
        }
    }

    #[test]
    fn test_inactive_service_is_no_service() {
        let feed = busy_feed("frequency_inactive");
        let active = services(&[]);
        let table = HeadwayClassTable::default();
        let engine = FrequencyEngine::new(&feed, &active, TimeWindow::WholeDay, &table);
        let route = engine.route_frequency(0);
        assert_eq!(route.count, 0);
        assert_eq!(route.headway_class, HeadwayClass::NoService);
    }

    #[test]
    fn test_counts_are_additive_over_partitions() {
        let feed = busy_feed("frequency_partition");
        let active = services(&["daily"]);
        let table = HeadwayClassTable::default();
        let s1 = feed.stop_position("s1").expect("s1");
        let s2 = feed.stop_position("s2").expect("s2");

        let counts = |window: TimeWindow| {
            let engine = FrequencyEngine::new(&feed, &active, window, &table);
            (
                engine.route_frequency(0).count,
                engine.stop_frequency(s1).count,
                engine.stop_frequency(s2).count,
                engine.group_frequency("g", &[s1, s2]).count,
            )
        };
        let whole = counts(TimeWindow::WholeDay);
        // loop leaves s1 and s2 before it ends back at s1
        assert_eq!(whole, (6, 6, 5, 11));

        let partitions: Vec<Vec<TimeWindow>> = vec![
            vec![
                TimeWindow::new(None, Some(6 * H)).expect("window"),
                TimeWindow::new(Some(6 * H), None).expect("window"),
            ],
            vec![
                TimeWindow::new(None, Some(6 * H)).expect("window"),
                TimeWindow::new(Some(6 * H), Some(9 * H)).expect("window"),
                TimeWindow::new(Some(9 * H), Some(24 * H)).expect("window"),
                TimeWindow::new(Some(24 * H), None).expect("window"),
            ],
        ];
        for partition in partitions.into_iter() {
            let sum = partition.into_iter().map(counts).fold((0, 0, 0, 0), |acc, c| {
                (acc.0 + c.0, acc.1 + c.1, acc.2 + c.2, acc.3 + c.3)
            });
            assert_eq!(sum, whole);
        }
    }

    #[test]
    fn test_route_counts_departures_at_every_stop() {
        let tables = test_feed::with_table(
            test_feed::with_table(
                test_feed::minimal_feed(),
                "stops.txt",
                "stop_id,stop_name,stop_lat,stop_lon\n\
                 s1,Harbor,35.0,139.0\n\
                 s2,Hill,35.01,139.01\n\
                 s3,Depot,35.02,139.02\n",
            ),
            "stop_times.txt",
            "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
             t1,05:55:00,05:55:00,s1,1\n\
             t1,06:05:00,06:05:00,s2,2\n\
             t1,06:15:00,06:15:00,s3,3\n",
        );
        let dir = test_feed::write_feed("frequency_every_stop", &tables);
        let feed = FeedStore::load(&dir).expect("load");
        let active = services(&["daily"]);
        let table = HeadwayClassTable::default();
        // t1 leaves s1 before the window, leaves s2 inside it and ends at s3
        let window = TimeWindow::new(Some(6 * H), Some(7 * H)).expect("window");
        let engine = FrequencyEngine::new(&feed, &active, window, &table);
        let route = engine.route_frequency(0);
        assert_eq!(route.count, 1);
        assert_ne!(route.headway_class, HeadwayClass::NoService);
        let s2 = feed.stop_position("s2").expect("s2");
        assert_eq!(engine.stop_frequency(s2).count, 1);
        let s3 = feed.stop_position("s3").expect("s3");
        assert_eq!(engine.stop_frequency(s3).count, 1);

        let whole = FrequencyEngine::new(&feed, &active, TimeWindow::WholeDay, &table);
        assert_eq!(whole.route_frequency(0).count, 2);
    }

    #[test]
    fn test_open_window_rate_covers_post_midnight_service() {
        let tables = test_feed::with_table(
            test_feed::with_table(
                test_feed::minimal_feed(),
                "trips.txt",
                "route_id,service_id,trip_id\n\
                 r1,daily,n1\n\
                 r1,daily,n2\n\
                 r1,daily,n3\n\
                 r1,daily,n4\n",
            ),
            "stop_times.txt",
            "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
             n1,23:10:00,23:10:00,s1,1\n\
             n1,23:20:00,23:20:00,s2,2\n\
             n2,24:10:00,24:10:00,s1,1\n\
             n2,24:20:00,24:20:00,s2,2\n\
             n3,25:10:00,25:10:00,s1,1\n\
             n3,25:20:00,25:20:00,s2,2\n\
             n4,26:10:00,26:10:00,s1,1\n\
             n4,26:20:00,26:20:00,s2,2\n",
        );
        let dir = test_feed::write_feed("frequency_open_window", &tables);
        let feed = FeedStore::load(&dir).expect("load");
        let active = services(&["daily"]);
        let table = HeadwayClassTable::default();
        let window = TimeWindow::new(Some(23 * H), None).expect("window");
        let engine = FrequencyEngine::new(&feed, &active, window, &table);
        let route = engine.route_frequency(0);
        // four departures over 23:00 to 26:20, not over a single hour
        assert_eq!(route.count, 4);
        assert_eq!(route.headway_class, HeadwayClass::Infrequent);
    }

    #[test]
    fn test_headway_trips_expand() {
        let tables = test_feed::with_table(
            test_feed::minimal_feed(),
            "frequencies.txt",
            "trip_id,start_time,end_time,headway_secs\n\
             t1,07:00:00,09:00:00,600\n",
        );
        let dir = test_feed::write_feed("frequency_headways", &tables);
        let feed = FeedStore::load(&dir).expect("load");
        let active = services(&["daily"]);
        let table = HeadwayClassTable::default();
        let window = TimeWindow::new(Some(7 * H), Some(8 * H)).expect("window");
        let engine = FrequencyEngine::new(&feed, &active, window, &table);
        let route = engine.route_frequency(0);
        assert_eq!(route.count, 6);
        assert_eq!(route.headway_class, HeadwayClass::VeryFrequent);
        let whole = FrequencyEngine::new(&feed, &active, TimeWindow::WholeDay, &table);
        assert_eq!(whole.route_frequency(0).count, 12);
    }
}
