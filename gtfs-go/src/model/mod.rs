pub mod assembly;
pub mod calendar;
pub mod feed;
pub mod frequency;
pub mod geometry;
pub mod interpolation;
pub mod parser;

mod gtfs_go_error;
mod gtfs_go_warning;

pub use gtfs_go_error::GtfsGoError;
pub use gtfs_go_warning::GtfsGoWarning;
