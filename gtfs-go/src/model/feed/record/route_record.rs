use serde::Deserialize;

/// a single row from routes.txt
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRecord {
    pub route_id: String,
    #[serde(default)]
    pub agency_id: Option<String>,
    #[serde(default)]
    pub route_short_name: Option<String>,
    #[serde(default)]
    pub route_long_name: Option<String>,
    /// basic (0-12) or extended (100-1702) route type
    pub route_type: u16,
    /// hex color without the leading '#'
    #[serde(default)]
    pub route_color: Option<String>,
    #[serde(default)]
    pub route_text_color: Option<String>,
}
