use std::collections::HashSet;

use chrono::NaiveDate;

use crate::model::calendar::{Service, ServiceDate};

/// determines which services run on a given date.
pub struct CalendarResolver<'a> {
    services: &'a [Service],
}

impl<'a> CalendarResolver<'a> {
    pub fn new(services: &'a [Service]) -> CalendarResolver<'a> {
        CalendarResolver { services }
    }

    /// the ids of services active on `date`. an empty set is a valid answer
    /// meaning there is no service that day.
    pub fn active_services(&self, date: &NaiveDate) -> HashSet<String> {
        self.services
            .iter()
            .filter(|s| s.is_active_on(date))
            .map(|s| s.id.clone())
            .collect()
    }

    /// every service id known to the feed.
    pub fn all_services(&self) -> HashSet<String> {
        self.services.iter().map(|s| s.id.clone()).collect()
    }

    pub fn resolve(&self, service_date: &ServiceDate) -> HashSet<String> {
        match service_date {
            ServiceDate::On(date) => self.active_services(date),
            ServiceDate::Unfiltered => self.all_services(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::feed::record::ExceptionType;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y%m%d").expect("test invariant failed: bad date")
    }

    fn services() -> Vec<Service> {
        let mut weekday = Service::new("weekday");
        weekday.set_weekly_pattern(
            [true, true, true, true, true, false, false],
            date("20240101"),
            date("20241231"),
        );
        let mut weekend = Service::new("weekend");
        weekend.set_weekly_pattern(
            [false, false, false, false, false, true, true],
            date("20240101"),
            date("20241231"),
        );
        // new year's day runs the weekend schedule
        weekday.add_exception(date("20240101"), ExceptionType::Removed);
        weekend.add_exception(date("20240101"), ExceptionType::Added);
        vec![weekday, weekend]
    }

    #[test]
    fn test_active_services_by_weekday() {
        let services = services();
        let resolver = CalendarResolver::new(&services);
        // Wednesday 2024-01-10
        let active = resolver.active_services(&date("20240110"));
        assert_eq!(active, HashSet::from([String::from("weekday")]));
        // Saturday 2024-01-13
        let active = resolver.active_services(&date("20240113"));
        assert_eq!(active, HashSet::from([String::from("weekend")]));
    }

    #[test]
    fn test_holiday_exception_swaps_services() {
        let services = services();
        let resolver = CalendarResolver::new(&services);
        let active = resolver.active_services(&date("20240101"));
        assert_eq!(active, HashSet::from([String::from("weekend")]));
    }

    #[test]
    fn test_date_outside_all_ranges_is_empty() {
        let services = services();
        let resolver = CalendarResolver::new(&services);
        for d in ["20231231", "20250101", "20300615"] {
            assert!(resolver.active_services(&date(d)).is_empty(), "{d}");
        }
    }

    #[test]
    fn test_unfiltered_returns_every_service() {
        let services = services();
        let resolver = CalendarResolver::new(&services);
        assert_eq!(resolver.resolve(&ServiceDate::Unfiltered).len(), 2);
    }
}
