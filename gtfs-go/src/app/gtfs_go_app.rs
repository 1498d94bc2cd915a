use super::GtfsGoOperation;
use clap::Parser;

/// command line tool converting a GTFS feed into route and stop GeoJSON layers
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct GtfsGoApp {
    #[command(subcommand)]
    pub op: GtfsGoOperation,
}
