// Wire -> domain conversions. Discovery-service types never escape raw
// past this boundary.

use oba_api::models::{RegionBoundResponse, RegionResponse};

use crate::error::CoreError;
use crate::model::{Region, RegionBound};

impl TryFrom<RegionResponse> for Region {
    type Error = CoreError;

    fn try_from(wire: RegionResponse) -> Result<Self, Self::Error> {
        let base_url = wire.oba_base_url.parse().map_err(|e| CoreError::InvalidRegion {
            id: wire.id,
            reason: format!("bad base URL {:?}: {e}", wire.oba_base_url),
        })?;

        // A malformed sidecar URL only disables the sidecar service; it
        // doesn't invalidate the region.
        let sidecar_base_url = wire
            .sidecar_base_url
            .as_deref()
            .and_then(|raw| raw.parse().ok());

        Ok(Self {
            id: wire.id,
            name: wire.region_name,
            base_url,
            sidecar_base_url,
            contact_email: wire.contact_email,
            active: wire.active,
            experimental: wire.experimental,
            supports_realtime: wire.supports_oba_realtime_apis,
            supports_discovery: wire.supports_oba_discovery_apis,
            bounds: wire.bounds.into_iter().map(RegionBound::from).collect(),
        })
    }
}

impl From<RegionBoundResponse> for RegionBound {
    fn from(wire: RegionBoundResponse) -> Self {
        Self {
            lat: wire.lat,
            lon: wire.lon,
            lat_span: wire.lat_span,
            lon_span: wire.lon_span,
        }
    }
}
