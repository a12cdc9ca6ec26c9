use serde::{Deserialize, Serialize};

/// A trip record from the references table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub route_id: String,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub trip_headsign: Option<String>,
    #[serde(default)]
    pub direction_id: Option<String>,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub shape_id: Option<String>,
}

/// Payload of `trip-details`: a trip's schedule plus its live status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub trip_id: String,
    #[serde(default)]
    pub service_date: i64,
    #[serde(default)]
    pub status: Option<TripStatus>,
    #[serde(default)]
    pub schedule: Option<TripSchedule>,
    #[serde(default)]
    pub situation_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSchedule {
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub stop_times: Vec<TripStopTime>,
    #[serde(default)]
    pub previous_trip_id: Option<String>,
    #[serde(default)]
    pub next_trip_id: Option<String>,
}

/// One scheduled stop on a trip. Times are seconds since midnight of the
/// service date.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStopTime {
    pub stop_id: String,
    #[serde(default)]
    pub arrival_time: i64,
    #[serde(default)]
    pub departure_time: i64,
    #[serde(default)]
    pub distance_along_trip: f64,
}

/// Live status of a trip's vehicle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStatus {
    #[serde(default)]
    pub active_trip_id: Option<String>,
    #[serde(default)]
    pub predicted: bool,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub orientation: f64,
    /// Seconds ahead of (negative) or behind (positive) schedule.
    #[serde(default)]
    pub schedule_deviation: i64,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub last_update_time: i64,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

/// A vehicle's status from `vehicles-for-agency`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleStatus {
    pub vehicle_id: String,
    #[serde(default)]
    pub last_update_time: i64,
    #[serde(default)]
    pub last_location_update_time: i64,
    #[serde(default)]
    pub location: Option<Position>,
    #[serde(default)]
    pub trip_id: Option<String>,
    #[serde(default)]
    pub trip_status: Option<TripStatus>,
}

/// A Google-encoded polyline, as returned by `shape` and inside
/// `stops-for-route`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedPolyline {
    pub points: String,
    #[serde(default)]
    pub length: i32,
    #[serde(default)]
    pub levels: Option<String>,
}
