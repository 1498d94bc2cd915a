use serde::{Deserialize, Serialize};

/// how a frequency run without a target date picks its active services.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmptyDatePolicy {
    /// every service in the feed is active
    #[default]
    AllServices,
    /// services active on the current local date
    Today,
}
