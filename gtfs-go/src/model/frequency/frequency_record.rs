use serde::Serialize;

use crate::model::frequency::HeadwayClass;

/// departure count and service level for one route, stop or stop group.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FrequencyRecord {
    pub id: String,
    pub count: usize,
    pub headway_class: HeadwayClass,
}
