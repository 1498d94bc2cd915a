mod agency;
pub mod date_codec;
mod feed_store;
mod gtfs_table;
pub mod gtfs_time;
pub mod record;
mod route;
mod stop;
mod table_reader;
mod trip;

#[cfg(test)]
pub(crate) mod test_feed;

pub use agency::Agency;
pub use feed_store::FeedStore;
pub use gtfs_table::GtfsTable;
pub use route::Route;
pub use stop::{is_valid_wgs84, Stop};
pub use trip::{shift_time, HeadwayEntry, StopTime, Trip};
