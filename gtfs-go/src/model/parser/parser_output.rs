use crate::model::{assembly::AssembledFeatures, GtfsGoWarning};

/// features of a successful run and every recoverable problem met on the way.
#[derive(Debug, Clone)]
pub struct ParserOutput {
    pub features: AssembledFeatures,
    pub warnings: Vec<GtfsGoWarning>,
}
