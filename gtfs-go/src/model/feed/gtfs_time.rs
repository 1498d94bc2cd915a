//! GTFS times are offsets from the start of the service day ("noon minus 12h")
//! written as `H:MM:SS` or `HH:MM:SS`. hours may be 24 or greater for trips
//! that run past midnight, so a wall-clock type cannot represent them. we
//! use whole seconds as `u32`.

pub const SECONDS_PER_HOUR: u32 = 3_600;
pub const SECONDS_PER_DAY: u32 = 86_400;

/// parses a GTFS time string into seconds since the start of the service day.
pub fn parse_gtfs_time(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() != 3 {
        return Err(format!("invalid time '{trimmed}', expected HH:MM:SS"));
    }
    let field = |s: &str, name: &str| -> Result<u32, String> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("invalid {name} '{s}' in time '{trimmed}'"));
        }
        s.parse::<u32>()
            .map_err(|e| format!("invalid {name} '{s}' in time '{trimmed}': {e}"))
    };
    let hours = field(parts[0], "hours")?;
    let minutes = field(parts[1], "minutes")?;
    let seconds = field(parts[2], "seconds")?;
    if minutes >= 60 || seconds >= 60 {
        return Err(format!("minutes and seconds must be below 60 in '{trimmed}'"));
    }
    hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(|h| h.checked_add(minutes * 60 + seconds))
        .ok_or_else(|| format!("time '{trimmed}' overflows"))
}

/// parses an optional GTFS time field where an empty value means "absent".
pub fn parse_optional_gtfs_time(value: Option<&str>) -> Result<Option<u32>, String> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_gtfs_time(s).map(Some),
    }
}

/// formats seconds since service day start as `HH:MM:SS`, allowing hours past 24.
pub fn format_gtfs_time(seconds: u32) -> String {
    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_times_past_midnight() {
        assert_eq!(parse_gtfs_time("08:15:30"), Ok(8 * 3600 + 15 * 60 + 30));
        assert_eq!(parse_gtfs_time("7:00:00"), Ok(7 * 3600));
        assert_eq!(parse_gtfs_time("25:10:00"), Ok(25 * 3600 + 600));
        assert_eq!(parse_gtfs_time(" 00:00:00 "), Ok(0));
    }

    #[test]
    fn test_parse_rejects_malformed_times() {
        assert!(parse_gtfs_time("").is_err());
        assert!(parse_gtfs_time("08:15").is_err());
        assert!(parse_gtfs_time("08:61:00").is_err());
        assert!(parse_gtfs_time("ab:00:00").is_err());
        assert!(parse_gtfs_time("-1:00:00").is_err());
    }

    #[test]
    fn test_optional_time_empty_is_none() {
        assert_eq!(parse_optional_gtfs_time(None), Ok(None));
        assert_eq!(parse_optional_gtfs_time(Some("  ")), Ok(None));
        assert_eq!(parse_optional_gtfs_time(Some("01:00:00")), Ok(Some(3600)));
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_gtfs_time(0), "00:00:00");
        assert_eq!(format_gtfs_time(25 * 3600 + 61), "25:01:01");
    }
}
