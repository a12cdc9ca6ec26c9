// Trip and shape endpoints.

use crate::envelope::EntryResult;
use crate::error::Error;
use crate::models::{EncodedPolyline, TripDetails};

use super::Client;

/// Optional parameters for [`Client::trip_details`].
#[derive(Debug, Clone, Default)]
pub struct TripDetailsQuery {
    pub vehicle_id: Option<String>,
    /// Midnight of the service day, epoch milliseconds. Without it the
    /// server guesses the currently-active service date.
    pub service_date: Option<i64>,
}

impl Client {
    /// `trip-details/{id}`: a trip's schedule plus live status.
    pub async fn trip_details(
        &self,
        trip_id: &str,
        params: &TripDetailsQuery,
    ) -> Result<EntryResult<TripDetails>, Error> {
        let mut query = Vec::new();
        if let Some(ref vehicle_id) = params.vehicle_id {
            query.push(("vehicleId", vehicle_id.clone()));
        }
        if let Some(service_date) = params.service_date {
            query.push(("serviceDate", service_date.to_string()));
        }

        self.get_entry(&format!("api/where/trip-details/{trip_id}.json"), &query)
            .await
    }

    /// `shape/{id}`: the encoded polyline for a trip's shape.
    pub async fn shape(&self, shape_id: &str) -> Result<EntryResult<EncodedPolyline>, Error> {
        self.get_entry(&format!("api/where/shape/{shape_id}.json"), &[])
            .await
    }
}
