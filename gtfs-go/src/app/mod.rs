mod gtfs_go_app;
mod operation;
pub mod output_ops;

pub use gtfs_go_app::GtfsGoApp;
pub use operation::GtfsGoOperation;
