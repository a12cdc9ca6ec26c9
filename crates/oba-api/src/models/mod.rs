// Wire types for the `where` API.
//
// Fields use `#[serde(default)]` liberally because regional deployments
// run a wide spread of server versions and are inconsistent about field
// presence. Only the fields this crate's consumers actually read are
// modeled explicitly; the largest objects carry a catch-all map for the
// rest.

mod agencies;
mod arrivals;
mod regions;
mod routes;
mod stops;
mod trips;

pub use agencies::{Agency, AgencyWithCoverage, CurrentTime};
pub use arrivals::{ArrivalAndDeparture, StopArrivals};
pub use regions::{RegionBoundResponse, RegionResponse};
pub use routes::{Route, StopsForRoute};
pub use stops::Stop;
pub use trips::{
    EncodedPolyline, Position, Trip, TripDetails, TripSchedule, TripStatus, TripStopTime,
    VehicleStatus,
};

use serde::{Deserialize, Serialize};

// ── References ───────────────────────────────────────────────────────

/// Shared lookup tables attached to every envelope: entities that the
/// primary payload points at by ID (agencies, routes, stops, trips,
/// situations), deduplicated across the response.
#[derive(Debug, Default, Deserialize)]
pub struct References {
    #[serde(default)]
    pub agencies: Vec<Agency>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub stops: Vec<Stop>,
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub situations: Vec<Situation>,
}

// ── Situations (service alerts in the JSON envelope) ─────────────────

/// A service alert carried in the references table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Situation {
    pub id: String,
    #[serde(default)]
    pub creation_time: i64,
    #[serde(default)]
    pub summary: Option<NaturalLanguageString>,
    #[serde(default)]
    pub description: Option<NaturalLanguageString>,
    #[serde(default)]
    pub url: Option<NaturalLanguageString>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub active_windows: Vec<TimeWindow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaturalLanguageString {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Epoch-seconds window during which a situation is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(default)]
    pub from: i64,
    #[serde(default)]
    pub to: i64,
}
