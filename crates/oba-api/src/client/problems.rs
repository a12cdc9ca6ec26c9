// Problem reporting: riders flag bad stop data or trip-level issues.
//
// Submissions are GET requests with query-encoded fields, a quirk of the
// upstream API; the server answers with a bare status envelope.

use crate::error::Error;

use super::Client;

/// What is wrong with a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopProblemCode {
    NameWrong,
    NumberWrong,
    LocationWrong,
    RouteOrTripMissing,
    Other,
}

impl StopProblemCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::NameWrong => "stop_name_wrong",
            Self::NumberWrong => "stop_number_wrong",
            Self::LocationWrong => "stop_location_wrong",
            Self::RouteOrTripMissing => "route_or_trip_missing",
            Self::Other => "other",
        }
    }
}

/// What went wrong on a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripProblemCode {
    VehicleNeverCame,
    VehicleCameEarly,
    VehicleCameLate,
    WrongHeadsign,
    VehicleDoesNotStopHere,
    Other,
}

impl TripProblemCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::VehicleNeverCame => "vehicle_never_came",
            Self::VehicleCameEarly => "vehicle_came_early",
            Self::VehicleCameLate => "vehicle_came_late",
            Self::WrongHeadsign => "wrong_headsign",
            Self::VehicleDoesNotStopHere => "vehicle_does_not_stop_here",
            Self::Other => "other",
        }
    }
}

/// A rider's report about a stop.
#[derive(Debug, Clone)]
pub struct StopProblemReport {
    pub stop_id: String,
    pub code: StopProblemCode,
    pub user_comment: Option<String>,
    /// Rider location at submission time, `(lat, lon)`.
    pub user_location: Option<(f64, f64)>,
}

/// A rider's report about a trip.
#[derive(Debug, Clone)]
pub struct TripProblemReport {
    pub trip_id: String,
    /// Midnight of the service day, epoch milliseconds.
    pub service_date: i64,
    pub vehicle_id: Option<String>,
    pub stop_id: Option<String>,
    pub code: TripProblemCode,
    pub user_comment: Option<String>,
    pub user_on_vehicle: Option<bool>,
    pub user_location: Option<(f64, f64)>,
}

impl Client {
    /// `report-problem-with-stop/{id}`: submit a stop problem report.
    pub async fn report_problem_with_stop(&self, report: &StopProblemReport) -> Result<(), Error> {
        let mut query = vec![("code", report.code.as_str().to_owned())];
        if let Some(ref comment) = report.user_comment {
            query.push(("userComment", comment.clone()));
        }
        push_location(&mut query, report.user_location);

        self.get_status(
            &format!("api/where/report-problem-with-stop/{}.json", report.stop_id),
            &query,
        )
        .await
    }

    /// `report-problem-with-trip/{id}`: submit a trip problem report.
    pub async fn report_problem_with_trip(&self, report: &TripProblemReport) -> Result<(), Error> {
        let mut query = vec![
            ("code", report.code.as_str().to_owned()),
            ("serviceDate", report.service_date.to_string()),
        ];
        if let Some(ref vehicle_id) = report.vehicle_id {
            query.push(("vehicleId", vehicle_id.clone()));
        }
        if let Some(ref stop_id) = report.stop_id {
            query.push(("stopId", stop_id.clone()));
        }
        if let Some(ref comment) = report.user_comment {
            query.push(("userComment", comment.clone()));
        }
        if let Some(on_vehicle) = report.user_on_vehicle {
            query.push(("userOnVehicle", on_vehicle.to_string()));
        }
        push_location(&mut query, report.user_location);

        self.get_status(
            &format!("api/where/report-problem-with-trip/{}.json", report.trip_id),
            &query,
        )
        .await
    }
}

fn push_location(query: &mut Vec<(&'static str, String)>, location: Option<(f64, f64)>) {
    if let Some((lat, lon)) = location {
        query.push(("userLat", lat.to_string()));
        query.push(("userLon", lon.to_string()));
    }
}
