use serde::{Deserialize, Serialize};

use super::trips::EncodedPolyline;

/// A transit route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub agency_id: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// GTFS route type: 0=tram, 1=subway, 2=rail, 3=bus, 4=ferry, ...
    #[serde(default, rename = "type")]
    pub route_type: i32,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
}

/// Payload of `stops-for-route`: the stops a route serves plus the
/// shape polylines to draw it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopsForRoute {
    #[serde(default)]
    pub route_id: Option<String>,
    #[serde(default)]
    pub stop_ids: Vec<String>,
    #[serde(default)]
    pub polylines: Vec<EncodedPolyline>,
}
