use serde::{Deserialize, Serialize};

/// A transit agency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub private_service: bool,
}

/// An agency plus the rectangle its service covers, from
/// `agencies-with-coverage`. The full [`Agency`](super::Agency) record
/// arrives in the response references, keyed by `agency_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyWithCoverage {
    pub agency_id: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
    #[serde(default)]
    pub lat_span: f64,
    #[serde(default)]
    pub lon_span: f64,
}

/// Payload of `current-time`: the server clock, for correcting client
/// drift when rendering arrival countdowns.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTime {
    /// Epoch milliseconds.
    pub time: i64,
    #[serde(default)]
    pub readable_time: Option<String>,
}
