use std::fmt::Display;

use chrono::NaiveDate;

use crate::config::EmptyDatePolicy;

/// the date a frequency run resolves services against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceDate {
    /// services active on this date
    On(NaiveDate),
    /// no date filter: every service in the feed counts as active. this can
    /// mix weekday, weekend and holiday calendars in one result.
    Unfiltered,
}

impl ServiceDate {
    /// chooses the service date for an optional target date. an empty target
    /// date is interpreted by the configured [`EmptyDatePolicy`].
    pub fn new(target_date: Option<NaiveDate>, policy: &EmptyDatePolicy) -> ServiceDate {
        match (target_date, policy) {
            (Some(date), _) => ServiceDate::On(date),
            (None, EmptyDatePolicy::AllServices) => ServiceDate::Unfiltered,
            (None, EmptyDatePolicy::Today) => ServiceDate::On(chrono::Local::now().date_naive()),
        }
    }
}

impl Display for ServiceDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceDate::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            ServiceDate::Unfiltered => write!(f, "all service dates"),
        }
    }
}
