use serde::{Deserialize, Serialize};

/// A region record from the discovery service (`regions-v3.json`).
///
/// This is the raw wire shape; `oba-core` converts it into its domain
/// `Region` type (typed URLs, normalized bounds) at one boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponse {
    pub id: i64,
    pub region_name: String,
    pub oba_base_url: String,
    /// Base URL of the region's sidecar service (surveys, deep links),
    /// when one is deployed.
    #[serde(default)]
    pub sidecar_base_url: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub experimental: bool,
    #[serde(default)]
    pub supports_oba_realtime_apis: bool,
    #[serde(default)]
    pub supports_oba_discovery_apis: bool,
    #[serde(default)]
    pub bounds: Vec<RegionBoundResponse>,
    /// Catch-all for fields the discovery service adds over time.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One rectangular coverage box: center point plus full spans, degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionBoundResponse {
    pub lat: f64,
    pub lon: f64,
    pub lat_span: f64,
    pub lon_span: f64,
}
