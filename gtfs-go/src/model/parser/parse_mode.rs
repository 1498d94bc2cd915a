use chrono::NaiveDate;

/// what a parse run produces.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseMode {
    /// route lines and stop points with identity attributes
    Simple,
    /// service frequencies over a date and time window, with near-duplicate
    /// stops merged
    Frequency(FrequencyParameters),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyParameters {
    pub target_date: Option<NaiveDate>,
    /// window start in seconds since service day start
    pub start_time: Option<u32>,
    /// window end in seconds since service day start, exclusive
    pub end_time: Option<u32>,
    pub delimiter: Option<String>,
}
