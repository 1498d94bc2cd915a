use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// the GTFS tables read by the feed store.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GtfsTable {
    Agency,
    Routes,
    Trips,
    Stops,
    StopTimes,
    Calendar,
    CalendarDates,
    Shapes,
    Frequencies,
}

impl GtfsTable {
    pub fn filename(&self) -> &'static str {
        match self {
            GtfsTable::Agency => "agency.txt",
            GtfsTable::Routes => "routes.txt",
            GtfsTable::Trips => "trips.txt",
            GtfsTable::Stops => "stops.txt",
            GtfsTable::StopTimes => "stop_times.txt",
            GtfsTable::Calendar => "calendar.txt",
            GtfsTable::CalendarDates => "calendar_dates.txt",
            GtfsTable::Shapes => "shapes.txt",
            GtfsTable::Frequencies => "frequencies.txt",
        }
    }

    /// tables that must always be present. calendar.txt and calendar_dates.txt
    /// are each optional but at least one of them is required.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            GtfsTable::Routes | GtfsTable::Trips | GtfsTable::Stops | GtfsTable::StopTimes
        )
    }

    pub fn path_in(&self, feed_directory: &Path) -> PathBuf {
        feed_directory.join(self.filename())
    }
}

impl Display for GtfsTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.filename())
    }
}
