use serde::{Deserialize, Serialize};

use crate::{
    config::{EmptyDatePolicy, HeadwayClassTable, InterpolationConfig},
    model::GtfsGoError,
};

/// tunables for a parse run. run parameters such as the feed directory,
/// target date and time window come from the command line, not from here.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GtfsGoConfiguration {
    pub headway_classes: HeadwayClassTable,
    pub interpolation: InterpolationConfig,
    pub empty_date_policy: EmptyDatePolicy,
}

impl GtfsGoConfiguration {
    pub fn validate(&self) -> Result<(), GtfsGoError> {
        self.headway_classes
            .validate()
            .map_err(GtfsGoError::ConfigurationError)?;
        let interp = &self.interpolation;
        if !(0.0..=1.0).contains(&interp.name_similarity_threshold) {
            return Err(GtfsGoError::ConfigurationError(format!(
                "name_similarity_threshold must be within [0, 1], found {}",
                interp.name_similarity_threshold
            )));
        }
        if !interp.distance_threshold_meters.is_finite() || interp.distance_threshold_meters < 0.0 {
            return Err(GtfsGoError::ConfigurationError(format!(
                "distance_threshold_meters must be a non-negative number, found {}",
                interp.distance_threshold_meters
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for GtfsGoConfiguration {
    type Error = GtfsGoError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let read = || {
            std::fs::read_to_string(f)
                .map_err(|e| GtfsGoError::ConfigurationError(format!("failure reading {f}: {e}")))
        };
        let conf: GtfsGoConfiguration = if f.ends_with(".toml") {
            toml::from_str(&read()?).map_err(|e| {
                GtfsGoError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            serde_json::from_str(&read()?).map_err(|e| {
                GtfsGoError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(GtfsGoError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}
