use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::feed::date_codec::deserialize_naive_date;

/// defines if a date is added to or removed from a service
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionType {
    /// there will be service on that day
    #[serde(rename = "1")]
    Added,
    /// there won't be service on that day
    #[serde(rename = "2")]
    Removed,
}

/// a single row from calendar_dates.txt
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarDateRecord {
    pub service_id: String,
    #[serde(deserialize_with = "deserialize_naive_date")]
    pub date: NaiveDate,
    pub exception_type: ExceptionType,
}
