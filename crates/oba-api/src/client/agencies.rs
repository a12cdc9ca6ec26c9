// Agency-level endpoints.

use crate::envelope::{EntryResult, ListResult};
use crate::error::Error;
use crate::models::{AgencyWithCoverage, CurrentTime, VehicleStatus};

use super::Client;

impl Client {
    /// `agencies-with-coverage`: every agency this region serves, with
    /// its coverage rectangle. Full agency records arrive in the
    /// references.
    pub async fn agencies_with_coverage(&self) -> Result<ListResult<AgencyWithCoverage>, Error> {
        self.get_list("api/where/agencies-with-coverage.json", &[])
            .await
    }

    /// `current-time`: the server clock, for correcting client drift.
    pub async fn current_time(&self) -> Result<EntryResult<CurrentTime>, Error> {
        self.get_entry("api/where/current-time.json", &[]).await
    }

    /// `vehicles-for-agency/{id}`: live positions for an agency's fleet.
    pub async fn vehicles_for_agency(
        &self,
        agency_id: &str,
    ) -> Result<ListResult<VehicleStatus>, Error> {
        self.get_list(&format!("api/where/vehicles-for-agency/{agency_id}.json"), &[])
            .await
    }
}
