use chrono::{Datelike, NaiveDate};

/// tests a Monday-first weekly pattern against the weekday of a date.
pub fn matches_weekday(weekdays: &[bool; 7], date: &NaiveDate) -> bool {
    match date.weekday() {
        chrono::Weekday::Mon => weekdays[0],
        chrono::Weekday::Tue => weekdays[1],
        chrono::Weekday::Wed => weekdays[2],
        chrono::Weekday::Thu => weekdays[3],
        chrono::Weekday::Fri => weekdays[4],
        chrono::Weekday::Sat => weekdays[5],
        chrono::Weekday::Sun => weekdays[6],
    }
}

/// tests if a date lies within the inclusive range [start_date, end_date].
pub fn in_range(date: &NaiveDate, start_date: &NaiveDate, end_date: &NaiveDate) -> bool {
    start_date <= date && date <= end_date
}
