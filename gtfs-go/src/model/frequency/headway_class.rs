use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::config::HeadwayClassTable;

/// service level of a route or stop over a time window, from most to least
/// frequent.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HeadwayClass {
    VeryFrequent,
    Frequent,
    Regular,
    Infrequent,
    Rare,
    NoService,
}

impl HeadwayClass {
    /// classifies `count` departures over `hours` hours.
    pub fn classify(count: usize, hours: f64, table: &HeadwayClassTable) -> HeadwayClass {
        if count == 0 {
            return HeadwayClass::NoService;
        }
        let per_hour = count as f64 / hours;
        if per_hour >= table.very_frequent {
            HeadwayClass::VeryFrequent
        } else if per_hour >= table.frequent {
            HeadwayClass::Frequent
        } else if per_hour >= table.regular {
            HeadwayClass::Regular
        } else if per_hour >= table.infrequent {
            HeadwayClass::Infrequent
        } else {
            HeadwayClass::Rare
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeadwayClass::VeryFrequent => "very_frequent",
            HeadwayClass::Frequent => "frequent",
            HeadwayClass::Regular => "regular",
            HeadwayClass::Infrequent => "infrequent",
            HeadwayClass::Rare => "rare",
            HeadwayClass::NoService => "no_service",
        }
    }
}

impl Display for HeadwayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
