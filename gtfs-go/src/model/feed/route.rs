use crate::model::feed::record::RouteRecord;

/// a GTFS route. a route always has at least one trip once the feed is
/// loaded; routes without trips are dropped by the feed store.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: String,
    pub agency_id: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub route_type: u16,
    pub color: Option<String>,
    pub text_color: Option<String>,
}

impl Route {
    /// the long name when present, otherwise the short name, otherwise the id.
    pub fn display_name(&self) -> &str {
        [&self.long_name, &self.short_name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }
}

impl From<RouteRecord> for Route {
    fn from(record: RouteRecord) -> Self {
        let non_empty = |s: Option<String>| s.filter(|v| !v.is_empty());
        Self {
            id: record.route_id,
            agency_id: non_empty(record.agency_id),
            short_name: non_empty(record.route_short_name),
            long_name: non_empty(record.route_long_name),
            route_type: record.route_type,
            color: non_empty(record.route_color),
            text_color: non_empty(record.route_text_color),
        }
    }
}
