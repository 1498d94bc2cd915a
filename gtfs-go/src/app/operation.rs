use std::path::Path;

use chrono::NaiveDate;
use clap::Subcommand;
use serde::{Deserialize, Serialize};

use crate::{
    app::output_ops,
    config::GtfsGoConfiguration,
    model::{
        assembly::AssemblyOptions,
        feed::{date_codec, gtfs_time},
        parser::{FrequencyParameters, GtfsParser, ParseMode},
        GtfsGoError,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum GtfsGoOperation {
    /// write every route as a line and every stop as a point
    Simple {
        /// directory holding the unzipped GTFS .txt tables
        #[arg(long)]
        feed_directory: String,
        /// directory receiving routes.geojson and stops.geojson
        #[arg(long)]
        output_directory: String,
        /// draw routes from their stop sequence even when shapes.txt exists
        #[arg(long, default_value_t = false)]
        ignore_shapes: bool,
        /// leave out stops that no trip calls at
        #[arg(long, default_value_t = false)]
        ignore_no_route_stops: bool,
        #[arg(long, help = "path to .toml or .json file with gtfs_go parameters")]
        configuration_file: Option<String>,
    },
    /// write route and stop departure counts for a date and time window,
    /// merging stops that share a name and sit close together
    Frequency {
        /// directory holding the unzipped GTFS .txt tables
        #[arg(long)]
        feed_directory: String,
        /// directory receiving routes.geojson, stops.geojson and result.csv
        #[arg(long)]
        output_directory: String,
        /// service date as YYYYMMDD. when omitted the configured empty date
        /// policy applies
        #[arg(long, value_parser = date_codec::parse_gtfs_date)]
        date: Option<NaiveDate>,
        /// window start as HH:MM:SS, inclusive
        #[arg(long, value_parser = gtfs_time::parse_gtfs_time)]
        start_time: Option<u32>,
        /// window end as HH:MM:SS, exclusive. hours past 24 are allowed
        #[arg(long, value_parser = gtfs_time::parse_gtfs_time)]
        end_time: Option<u32>,
        /// stop names are cut at the first occurrence of this string before
        /// they are compared
        #[arg(long)]
        delimiter: Option<String>,
        /// draw routes from their stop sequence even when shapes.txt exists
        #[arg(long, default_value_t = false)]
        ignore_shapes: bool,
        #[arg(long, help = "path to .toml or .json file with gtfs_go parameters")]
        configuration_file: Option<String>,
    },
}

impl GtfsGoOperation {
    pub fn run(&self) -> Result<(), GtfsGoError> {
        match self {
            GtfsGoOperation::Simple {
                feed_directory,
                output_directory,
                ignore_shapes,
                ignore_no_route_stops,
                configuration_file,
            } => {
                let options = AssemblyOptions {
                    use_shapes: !ignore_shapes,
                    ignore_no_route_stops: *ignore_no_route_stops,
                };
                run_parser(
                    feed_directory,
                    output_directory,
                    configuration_file.as_ref(),
                    &ParseMode::Simple,
                    &options,
                )
            }
            GtfsGoOperation::Frequency {
                feed_directory,
                output_directory,
                date,
                start_time,
                end_time,
                delimiter,
                ignore_shapes,
                configuration_file,
            } => {
                let options = AssemblyOptions {
                    use_shapes: !ignore_shapes,
                    ignore_no_route_stops: false,
                };
                let mode = ParseMode::Frequency(FrequencyParameters {
                    target_date: *date,
                    start_time: *start_time,
                    end_time: *end_time,
                    delimiter: delimiter.clone().filter(|d| !d.is_empty()),
                });
                run_parser(
                    feed_directory,
                    output_directory,
                    configuration_file.as_ref(),
                    &mode,
                    &options,
                )
            }
        }
    }
}

fn run_parser(
    feed_directory: &str,
    output_directory: &str,
    configuration_file: Option<&String>,
    mode: &ParseMode,
    options: &AssemblyOptions,
) -> Result<(), GtfsGoError> {
    let conf = match configuration_file {
        None => Ok(GtfsGoConfiguration::default()),
        Some(f) => {
            log::info!("reading gtfs_go configuration from {f}");
            GtfsGoConfiguration::try_from(f)
        }
    }?;
    let parser = GtfsParser::new(conf);
    let output = parser.parse(Path::new(feed_directory), mode, options)?;
    for warning in output.warnings.iter() {
        log::warn!("{warning}");
    }
    let written = output_ops::write_outputs(Path::new(output_directory), &output.features)?;
    for path in written.iter() {
        log::info!("wrote {path:?}");
    }
    eprintln!(
        "finished with {} warnings, wrote {} files to {output_directory}",
        output.warnings.len(),
        written.len()
    );
    Ok(())
}
