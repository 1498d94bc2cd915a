//! reads an unzipped GTFS feed and writes route and stop GeoJSON layers,
//! optionally aggregated into service frequencies.
use clap::Parser;
use gtfs_go::app::GtfsGoApp;

fn main() {
    env_logger::init();
    let args = GtfsGoApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("gtfs_go failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
