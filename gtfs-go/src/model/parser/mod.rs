mod gtfs_parser;
mod parse_mode;
mod parser_output;

pub use gtfs_parser::GtfsParser;
pub use parse_mode::{FrequencyParameters, ParseMode};
pub use parser_output::ParserOutput;
