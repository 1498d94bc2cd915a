//! deserializers for dates parsed from a GTFS feed, which (should) use
//! yyyymmdd format. the same format is accepted for the target date
//! argument of a frequency run.
use chrono::NaiveDate;
use serde::{de::Error, Deserialize, Deserializer};

pub const GTFS_DATE_FORMAT: &str = "%Y%m%d";

pub fn parse_gtfs_date(date_str: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date_str.trim(), GTFS_DATE_FORMAT)
        .map_err(|e| format!("invalid date '{date_str}', expected YYYYMMDD: {e}"))
}

pub fn deserialize_naive_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let date_str: String = String::deserialize(deserializer)?;
    parse_gtfs_date(&date_str).map_err(D::Error::custom)
}
