use crate::model::feed::record::AgencyRecord;

/// a transit agency, used to label the routes it operates.
#[derive(Debug, Clone, PartialEq)]
pub struct Agency {
    pub id: Option<String>,
    pub name: String,
}

impl From<AgencyRecord> for Agency {
    fn from(record: AgencyRecord) -> Self {
        Self {
            id: record.agency_id.filter(|id| !id.is_empty()),
            name: record.agency_name,
        }
    }
}
