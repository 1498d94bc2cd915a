use std::fmt::Display;

use crate::model::feed::gtfs_time::{self, SECONDS_PER_DAY, SECONDS_PER_HOUR};

/// the span of departure times counted by a frequency run. times are
/// seconds since service day start and may pass 24:00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// every departure of the service day
    WholeDay,
    /// departures in `[start, end)`. an absent end leaves the window open.
    Range { start: u32, end: Option<u32> },
}

impl TimeWindow {
    /// builds a window from optional bounds. no bounds means the whole day.
    pub fn new(start: Option<u32>, end: Option<u32>) -> Result<TimeWindow, String> {
        match (start, end) {
            (None, None) => Ok(TimeWindow::WholeDay),
            (start, Some(end)) if end <= start.unwrap_or(0) => Err(format!(
                "time window end {} must be after start {}",
                gtfs_time::format_gtfs_time(end),
                gtfs_time::format_gtfs_time(start.unwrap_or(0))
            )),
            (start, end) => Ok(TimeWindow::Range {
                start: start.unwrap_or(0),
                end,
            }),
        }
    }

    pub fn contains(&self, time: u32) -> bool {
        match self {
            TimeWindow::WholeDay => true,
            TimeWindow::Range { start, end } => match end {
                Some(end) => *start <= time && time < *end,
                None => *start <= time,
            },
        }
    }

    /// length of the window in hours used to turn counts into rates. the
    /// whole day is 24 hours. an open window runs to 24:00:00 or to
    /// `service_day_end` when the service day runs later. no window is
    /// shorter than a minute.
    pub fn hours(&self, service_day_end: u32) -> f64 {
        let seconds = match self {
            TimeWindow::WholeDay => SECONDS_PER_DAY,
            TimeWindow::Range { start, end } => end
                .unwrap_or(service_day_end.max(SECONDS_PER_DAY))
                .saturating_sub(*start),
        };
        seconds.max(60) as f64 / SECONDS_PER_HOUR as f64
    }
}

impl Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeWindow::WholeDay => write!(f, "whole day"),
            TimeWindow::Range { start, end } => {
                let end_str = end.map(gtfs_time::format_gtfs_time).unwrap_or_default();
                write!(f, "[{}, {end_str})", gtfs_time::format_gtfs_time(*start))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::TimeWindow;

    #[test]
    fn test_new_window() {
        assert_eq!(TimeWindow::new(None, None), Ok(TimeWindow::WholeDay));
        assert_eq!(
            TimeWindow::new(None, Some(3600)),
            Ok(TimeWindow::Range {
                start: 0,
                end: Some(3600)
            })
        );
        assert!(TimeWindow::new(Some(3600), Some(3600)).is_err());
        assert!(TimeWindow::new(None, Some(0)).is_err());
    }

    #[test]
    fn test_contains_is_half_open() {
        let w = TimeWindow::new(Some(100), Some(200)).expect("valid window");
        assert!(!w.contains(99));
        assert!(w.contains(100));
        assert!(w.contains(199));
        assert!(!w.contains(200));
        let open = TimeWindow::new(Some(100), None).expect("valid window");
        assert!(open.contains(90_000));
        assert!(TimeWindow::WholeDay.contains(100_000));
    }

    #[test]
    fn test_hours() {
        let day = 24 * 3600;
        assert_eq!(TimeWindow::WholeDay.hours(day), 24.0);
        assert_eq!(TimeWindow::WholeDay.hours(27 * 3600), 24.0);
        let w = TimeWindow::new(Some(7 * 3600), Some(9 * 3600)).expect("valid window");
        assert_eq!(w.hours(27 * 3600), 2.0);
        let open = TimeWindow::new(Some(18 * 3600), None).expect("valid window");
        assert_eq!(open.hours(day), 6.0);
        let late = TimeWindow::new(Some(25 * 3600), None).expect("valid window");
        assert_eq!(late.hours(day), 60.0 / 3600.0);
    }

    #[test]
    fn test_open_window_runs_to_last_event() {
        let open = TimeWindow::new(Some(23 * 3600), None).expect("valid window");
        assert_eq!(open.hours(24 * 3600), 1.0);
        assert_eq!(open.hours(26 * 3600), 3.0);
        // service days ending before midnight still run to 24:00:00
        assert_eq!(open.hours(20 * 3600), 1.0);
        let late = TimeWindow::new(Some(25 * 3600), None).expect("valid window");
        assert_eq!(late.hours(26 * 3600 + 1800), 1.5);
    }
}
