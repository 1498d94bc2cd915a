use std::path::Path;

use crate::{
    config::GtfsGoConfiguration,
    model::{
        assembly::{AssembledFeatures, AssemblyOptions, FeatureAssembler},
        calendar::{CalendarResolver, ServiceDate},
        feed::FeedStore,
        frequency::{FrequencyEngine, TimeWindow},
        interpolation::StopInterpolator,
        parser::{FrequencyParameters, ParseMode, ParserOutput},
        GtfsGoError, GtfsGoWarning,
    },
};

/// runs the load, resolve, count and assemble stages for one feed.
pub struct GtfsParser {
    config: GtfsGoConfiguration,
}

impl GtfsParser {
    pub fn new(config: GtfsGoConfiguration) -> GtfsParser {
        GtfsParser { config }
    }

    pub fn config(&self) -> &GtfsGoConfiguration {
        &self.config
    }

    /// loads the feed at `feed_directory` and transforms it.
    pub fn parse(
        &self,
        feed_directory: &Path,
        mode: &ParseMode,
        options: &AssemblyOptions,
    ) -> Result<ParserOutput, GtfsGoError> {
        let feed = FeedStore::load(feed_directory)?;
        self.parse_feed(&feed, mode, options)
    }

    /// transforms an already loaded feed. load warnings are carried into the
    /// output ahead of the transform warnings.
    pub fn parse_feed(
        &self,
        feed: &FeedStore,
        mode: &ParseMode,
        options: &AssemblyOptions,
    ) -> Result<ParserOutput, GtfsGoError> {
        let mut warnings: Vec<GtfsGoWarning> = feed.warnings().to_vec();
        let assembler = FeatureAssembler::new(feed);
        let features = match mode {
            ParseMode::Simple => {
                let features = assembler.assemble_simple(options, &mut warnings);
                if features.routes.features.is_empty() {
                    warnings.push(GtfsGoWarning::EmptyResult(String::from(
                        "feed produced no route features",
                    )));
                }
                features
            }
            ParseMode::Frequency(params) => {
                self.parse_frequency(feed, &assembler, params, options, &mut warnings)?
            }
        };
        log::info!(
            "assembled {} route features and {} stop features with {} warnings",
            features.routes.features.len(),
            features.stops.features.len(),
            warnings.len()
        );
        Ok(ParserOutput { features, warnings })
    }

    fn parse_frequency(
        &self,
        feed: &FeedStore,
        assembler: &FeatureAssembler,
        params: &FrequencyParameters,
        options: &AssemblyOptions,
        warnings: &mut Vec<GtfsGoWarning>,
    ) -> Result<AssembledFeatures, GtfsGoError> {
        let window = TimeWindow::new(params.start_time, params.end_time)
            .map_err(GtfsGoError::InvalidArgumentError)?;
        let service_date = ServiceDate::new(params.target_date, &self.config.empty_date_policy);
        let active_services = CalendarResolver::new(feed.services()).resolve(&service_date);
        log::info!(
            "{} of {} services active for {service_date}, counting departures over {window}",
            active_services.len(),
            feed.services().len()
        );
        if active_services.is_empty() {
            warnings.push(GtfsGoWarning::EmptyResult(format!(
                "no service is active for {service_date}"
            )));
        }

        let engine = FrequencyEngine::new(
            feed,
            &active_services,
            window,
            &self.config.headway_classes,
        );
        let interpolator =
            StopInterpolator::new(&self.config.interpolation, params.delimiter.as_deref());
        let grouping = interpolator.group_stops(feed.stops());
        let features = assembler.assemble_frequency(&engine, &grouping, options, warnings);

        let no_departures = features
            .routes
            .features
            .iter()
            .all(|f| f.property("count").and_then(|c| c.as_u64()).unwrap_or(0) == 0);
        if !active_services.is_empty() && no_departures {
            warnings.push(GtfsGoWarning::EmptyResult(format!(
                "no departures within {window} for {service_date}"
            )));
        }
        Ok(features)
    }
}
