use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::feed::date_codec::deserialize_naive_date;

/// a single row from calendar.txt
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarRecord {
    /// unique service identifier
    pub service_id: String,

    /// service availability by day (0 or 1)
    pub monday: u8,
    pub tuesday: u8,
    pub wednesday: u8,
    pub thursday: u8,
    pub friday: u8,
    pub saturday: u8,
    pub sunday: u8,

    /// service start date (YYYYMMDD)
    #[serde(deserialize_with = "deserialize_naive_date")]
    pub start_date: NaiveDate,

    /// service end date (YYYYMMDD), inclusive
    #[serde(deserialize_with = "deserialize_naive_date")]
    pub end_date: NaiveDate,
}

impl CalendarRecord {
    /// weekly pattern ordered Monday through Sunday
    pub fn weekdays(&self) -> [bool; 7] {
        [
            self.monday == 1,
            self.tuesday == 1,
            self.wednesday == 1,
            self.thursday == 1,
            self.friday == 1,
            self.saturday == 1,
            self.sunday == 1,
        ]
    }
}
