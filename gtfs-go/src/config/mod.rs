mod empty_date_policy;
mod gtfs_go_configuration;
mod headway_class_table;
mod interpolation_config;

pub use empty_date_policy::EmptyDatePolicy;
pub use gtfs_go_configuration::GtfsGoConfiguration;
pub use headway_class_table::HeadwayClassTable;
pub use interpolation_config::InterpolationConfig;
