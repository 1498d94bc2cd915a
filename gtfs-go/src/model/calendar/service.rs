use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::{calendar::date_ops, feed::record::ExceptionType};

/// a service calendar assembled from calendar.txt and calendar_dates.txt.
/// a service may come from either file or both.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: String,
    /// Monday-first weekly pattern and inclusive date range from calendar.txt
    weekly: Option<([bool; 7], NaiveDate, NaiveDate)>,
    exceptions: HashMap<NaiveDate, ExceptionType>,
}

impl Service {
    pub fn new(id: &str) -> Service {
        Service {
            id: id.to_string(),
            weekly: None,
            exceptions: HashMap::new(),
        }
    }

    pub fn set_weekly_pattern(&mut self, weekdays: [bool; 7], start_date: NaiveDate, end_date: NaiveDate) {
        self.weekly = Some((weekdays, start_date, end_date));
    }

    /// records an exception. the last exception listed for a date wins.
    pub fn add_exception(&mut self, date: NaiveDate, exception_type: ExceptionType) {
        self.exceptions.insert(date, exception_type);
    }

    pub fn has_weekly_pattern(&self) -> bool {
        self.weekly.is_some()
    }

    /// the inclusive date range this service can be active on: the
    /// calendar.txt range extended to cover every added exception date.
    /// `None` for a service with neither, which is never active.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let added = self
            .exceptions
            .iter()
            .filter(|(_, e)| **e == ExceptionType::Added)
            .map(|(d, _)| *d);
        let calendar = self.weekly.iter().flat_map(|(_, s, e)| [*s, *e]);
        let mut dates = added.chain(calendar);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// resolves a date against this service. an exception on the exact date
    /// always wins, then the weekly pattern applies within the calendar.txt
    /// range. dates outside [`Service::date_range`] are never active.
    pub fn is_active_on(&self, date: &NaiveDate) -> bool {
        let Some((start, end)) = self.date_range() else {
            return false;
        };
        if !date_ops::in_range(date, &start, &end) {
            return false;
        }
        match self.exceptions.get(date) {
            Some(ExceptionType::Added) => true,
            Some(ExceptionType::Removed) => false,
            None => match &self.weekly {
                Some((weekdays, s, e)) => {
                    date_ops::in_range(date, s, e) && date_ops::matches_weekday(weekdays, date)
                }
                None => false,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y%m%d").expect("test invariant failed: bad date")
    }

    fn weekday_service() -> Service {
        let mut service = Service::new("weekday");
        let weekdays = [true, true, true, true, true, false, false];
        service.set_weekly_pattern(weekdays, date("20240101"), date("20240331"));
        service
    }

    #[test]
    fn test_weekly_pattern_within_range() {
        let service = weekday_service();
        // 2024-01-08 is a Monday, 2024-01-13 a Saturday
        assert!(service.is_active_on(&date("20240108")));
        assert!(!service.is_active_on(&date("20240113")));
    }

    #[test]
    fn test_outside_range_is_inactive() {
        let service = weekday_service();
        // Monday after the calendar ends
        assert!(!service.is_active_on(&date("20240401")));
        assert!(!service.is_active_on(&date("20231225")));
    }

    #[test]
    fn test_exceptions_override_weekly_pattern() {
        let mut service = weekday_service();
        service.add_exception(date("20240108"), ExceptionType::Removed);
        service.add_exception(date("20240113"), ExceptionType::Added);
        assert!(!service.is_active_on(&date("20240108")));
        assert!(service.is_active_on(&date("20240113")));
    }

    #[test]
    fn test_added_exception_extends_range() {
        let mut service = weekday_service();
        service.add_exception(date("20240406"), ExceptionType::Added);
        assert_eq!(
            service.date_range(),
            Some((date("20240101"), date("20240406")))
        );
        assert!(service.is_active_on(&date("20240406")));
        // weekly pattern does not extend with the range
        assert!(!service.is_active_on(&date("20240402")));
    }

    #[test]
    fn test_calendar_dates_only_service() {
        let mut service = Service::new("special");
        service.add_exception(date("20240704"), ExceptionType::Added);
        service.add_exception(date("20240705"), ExceptionType::Removed);
        assert!(!service.has_weekly_pattern());
        assert!(service.is_active_on(&date("20240704")));
        assert!(!service.is_active_on(&date("20240705")));
        assert!(!service.is_active_on(&date("20240703")));
    }
}
