//! helpers for writing small GTFS feeds to a temporary directory.
use std::path::PathBuf;

/// a single-route, single-trip feed running every day of 2024.
pub fn minimal_feed() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "agency.txt",
            "agency_id,agency_name,agency_url,agency_timezone\n\
             harbor,Harbor Transit,https://harbor.example,Asia/Tokyo\n",
        ),
        (
            "routes.txt",
            "route_id,agency_id,route_short_name,route_long_name,route_type,route_color\n\
             r1,harbor,1,Harbor Line,3,0055AA\n",
        ),
        (
            "trips.txt",
            "route_id,service_id,trip_id\n\
             r1,daily,t1\n",
        ),
        (
            "stops.txt",
            "stop_id,stop_name,stop_lat,stop_lon\n\
             s2,Hill,35.01,139.01\n\
             s1,Harbor,35.0,139.0\n",
        ),
        (
            "stop_times.txt",
            "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
             t1,08:10:00,08:10:00,s2,2\n\
             t1,08:00:00,08:00:00,s1,1\n",
        ),
        (
            "calendar.txt",
            "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date\n\
             daily,1,1,1,1,1,1,1,20240101,20241231\n",
        ),
    ]
}

/// replaces one table of a feed, or adds it when absent.
pub fn with_table(
    mut tables: Vec<(&'static str, &'static str)>,
    name: &'static str,
    contents: &'static str,
) -> Vec<(&'static str, &'static str)> {
    tables.retain(|(n, _)| *n != name);
    tables.push((name, contents));
    tables
}

/// writes the tables into a fresh directory named after the test.
pub fn write_feed(test_name: &str, tables: &[(&str, &str)]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "gtfs-go-test-{}-{test_name}",
        std::process::id()
    ));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).expect("test invariant failed: cannot clear temp dir");
    }
    std::fs::create_dir_all(&dir).expect("test invariant failed: cannot create temp dir");
    for (name, contents) in tables.iter() {
        std::fs::write(dir.join(name), contents)
            .expect("test invariant failed: cannot write feed table");
    }
    dir
}
