//! serde row types, one per GTFS table. rows are deserialized one at a time
//! so that a single bad row is reported and skipped instead of failing the
//! whole table. unknown columns are ignored.
mod agency_record;
mod calendar_date_record;
mod calendar_record;
mod headway_record;
mod route_record;
mod shape_record;
mod stop_record;
mod stop_time_record;
mod trip_record;

pub use agency_record::AgencyRecord;
pub use calendar_date_record::{CalendarDateRecord, ExceptionType};
pub use calendar_record::CalendarRecord;
pub use headway_record::HeadwayRecord;
pub use route_record::RouteRecord;
pub use shape_record::ShapeRecord;
pub use stop_record::StopRecord;
pub use stop_time_record::StopTimeRecord;
pub use trip_record::TripRecord;
