// Arrival/departure endpoints.

use crate::envelope::EntryResult;
use crate::error::Error;
use crate::models::{ArrivalAndDeparture, StopArrivals};

use super::Client;

impl Client {
    /// `arrivals-and-departures-for-stop`: upcoming service at a stop
    /// within a look-behind/look-ahead window, in minutes.
    pub async fn arrivals_and_departures_for_stop(
        &self,
        stop_id: &str,
        minutes_before: u32,
        minutes_after: u32,
    ) -> Result<EntryResult<StopArrivals>, Error> {
        let query = [
            ("minutesBefore", minutes_before.to_string()),
            ("minutesAfter", minutes_after.to_string()),
        ];
        self.get_entry(
            &format!("api/where/arrivals-and-departures-for-stop/{stop_id}.json"),
            &query,
        )
        .await
    }

    /// `arrival-and-departure-for-stop`: one specific trip's arrival at a
    /// stop, identified by trip + service date (and optionally vehicle and
    /// stop sequence, to disambiguate loop routes).
    pub async fn arrival_and_departure_for_stop(
        &self,
        stop_id: &str,
        trip_id: &str,
        service_date: i64,
        vehicle_id: Option<&str>,
        stop_sequence: Option<i32>,
    ) -> Result<EntryResult<ArrivalAndDeparture>, Error> {
        let mut query = vec![
            ("tripId", trip_id.to_owned()),
            ("serviceDate", service_date.to_string()),
        ];
        if let Some(vehicle_id) = vehicle_id {
            query.push(("vehicleId", vehicle_id.to_owned()));
        }
        if let Some(stop_sequence) = stop_sequence {
            query.push(("stopSequence", stop_sequence.to_string()));
        }

        self.get_entry(
            &format!("api/where/arrival-and-departure-for-stop/{stop_id}.json"),
            &query,
        )
        .await
    }
}
