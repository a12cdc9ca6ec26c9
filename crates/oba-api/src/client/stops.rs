// Stop endpoints: nearby-stop search, single-stop lookup, stops-for-route.

use crate::envelope::{EntryResult, ListResult};
use crate::error::Error;
use crate::models::{Stop, StopsForRoute};

use super::Client;

/// Optional constraints for [`Client::stops_for_location`].
#[derive(Debug, Clone, Default)]
pub struct StopsForLocationOptions {
    /// Search radius in meters. Ignored when a span is given.
    pub radius: Option<f64>,
    /// Explicit lat/lon span of the search box, degrees.
    pub lat_span: Option<f64>,
    pub lon_span: Option<f64>,
    /// Free-text filter (stop name or code).
    pub query: Option<String>,
}

impl Client {
    /// `stops-for-location`: stops near a coordinate.
    ///
    /// The result's `out_of_range` flag is set when the coordinate falls
    /// outside this server's coverage area -- callers use it to suggest
    /// switching regions.
    pub async fn stops_for_location(
        &self,
        lat: f64,
        lon: f64,
        options: &StopsForLocationOptions,
    ) -> Result<ListResult<Stop>, Error> {
        let mut query = vec![("lat", lat.to_string()), ("lon", lon.to_string())];
        if let Some(radius) = options.radius {
            query.push(("radius", radius.to_string()));
        }
        if let Some(lat_span) = options.lat_span {
            query.push(("latSpan", lat_span.to_string()));
        }
        if let Some(lon_span) = options.lon_span {
            query.push(("lonSpan", lon_span.to_string()));
        }
        if let Some(ref text) = options.query {
            query.push(("query", text.clone()));
        }

        self.get_list("api/where/stops-for-location.json", &query)
            .await
    }

    /// `stop/{id}`: a single stop.
    pub async fn stop(&self, stop_id: &str) -> Result<EntryResult<Stop>, Error> {
        self.get_entry(&format!("api/where/stop/{stop_id}.json"), &[])
            .await
    }

    /// `stops-for-route/{id}`: the stops a route serves, with shape
    /// polylines.
    pub async fn stops_for_route(&self, route_id: &str) -> Result<EntryResult<StopsForRoute>, Error> {
        self.get_entry(&format!("api/where/stops-for-route/{route_id}.json"), &[])
            .await
    }
}
