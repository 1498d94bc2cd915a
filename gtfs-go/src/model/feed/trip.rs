/// one visit of a trip to a stop. `stop_index` points into the feed store's
/// stop arena. times are seconds since service day start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTime {
    pub stop_index: usize,
    pub stop_sequence: u32,
    pub arrival_time: u32,
    pub departure_time: u32,
}

/// a headway-based service period from frequencies.txt. the template trip
/// starts every `headway_secs` within `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadwayEntry {
    pub start_time: u32,
    pub end_time: u32,
    pub headway_secs: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: String,
    pub route_id: String,
    pub service_id: String,
    pub shape_id: Option<String>,
    /// sorted by stop_sequence
    pub stop_times: Vec<StopTime>,
    pub headways: Vec<HeadwayEntry>,
}

impl Trip {
    pub fn first_departure(&self) -> Option<u32> {
        self.stop_times.first().map(|st| st.departure_time)
    }

    /// true when no stop time is earlier than the one before it.
    pub fn is_monotonic(&self) -> bool {
        self.stop_times.windows(2).all(|w| {
            w[0].arrival_time <= w[1].arrival_time && w[0].departure_time <= w[1].departure_time
        })
    }

    /// offsets in seconds to apply to this trip's stop times, one per vehicle
    /// run. a scheduled trip runs once with offset zero. a trip listed in
    /// frequencies.txt runs once per headway step, and its stop times are
    /// shifted so the first departure lands on that step.
    pub fn instance_offsets(&self) -> Vec<i64> {
        if self.headways.is_empty() {
            return vec![0];
        }
        let Some(first) = self.first_departure() else {
            return vec![];
        };
        let mut offsets = vec![];
        for entry in self.headways.iter().filter(|e| e.headway_secs > 0) {
            let mut start = entry.start_time;
            while start < entry.end_time {
                offsets.push(start as i64 - first as i64);
                start = match start.checked_add(entry.headway_secs) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
        offsets
    }
}

/// applies a run offset to a stop time, clamped to the representable range.
pub fn shift_time(time: u32, offset: i64) -> u32 {
    (time as i64 + offset).clamp(0, u32::MAX as i64) as u32
}
