use serde::{Deserialize, Serialize};

/// A transit stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    /// Rider-facing stop code (often painted on the sign); distinct from `id`.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    /// 0=stop, 1=station, 2=station entrance
    #[serde(default)]
    pub location_type: i32,
    #[serde(default)]
    pub route_ids: Vec<String>,
    #[serde(default)]
    pub wheelchair_boarding: Option<String>,
}
