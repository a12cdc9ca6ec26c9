use serde::{Deserialize, Serialize};

/// Payload of `arrivals-and-departures-for-stop`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopArrivals {
    pub stop_id: String,
    #[serde(default)]
    pub arrivals_and_departures: Vec<ArrivalAndDeparture>,
    #[serde(default)]
    pub nearby_stop_ids: Vec<String>,
    #[serde(default)]
    pub situation_ids: Vec<String>,
}

/// One upcoming (or recent) trip's service at a stop.
///
/// The server emits 30+ fields per arrival; the commonly consumed ones
/// are modeled explicitly and the rest land in `extra`. Times are epoch
/// milliseconds; predicted times are `0` when no realtime data exists
/// (check `predicted` first).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalAndDeparture {
    pub route_id: String,
    #[serde(default)]
    pub route_short_name: Option<String>,
    #[serde(default)]
    pub route_long_name: Option<String>,
    pub trip_id: String,
    #[serde(default)]
    pub trip_headsign: Option<String>,
    pub stop_id: String,
    #[serde(default)]
    pub stop_sequence: i32,
    /// Midnight of the service day, epoch milliseconds.
    #[serde(default)]
    pub service_date: i64,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub predicted: bool,
    #[serde(default)]
    pub predicted_arrival_time: i64,
    #[serde(default)]
    pub predicted_departure_time: i64,
    #[serde(default)]
    pub scheduled_arrival_time: i64,
    #[serde(default)]
    pub scheduled_departure_time: i64,
    #[serde(default)]
    pub arrival_enabled: bool,
    #[serde(default)]
    pub departure_enabled: bool,
    #[serde(default)]
    pub number_of_stops_away: i32,
    #[serde(default)]
    pub distance_from_stop: f64,
    #[serde(default)]
    pub situation_ids: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ArrivalAndDeparture {
    /// The best arrival estimate: predicted when realtime data exists,
    /// scheduled otherwise.
    pub fn best_arrival_time(&self) -> i64 {
        if self.predicted && self.predicted_arrival_time > 0 {
            self.predicted_arrival_time
        } else {
            self.scheduled_arrival_time
        }
    }

    /// The best departure estimate, same rule as
    /// [`best_arrival_time`](Self::best_arrival_time).
    pub fn best_departure_time(&self) -> i64 {
        if self.predicted && self.predicted_departure_time > 0 {
            self.predicted_departure_time
        } else {
            self.scheduled_departure_time
        }
    }
}
