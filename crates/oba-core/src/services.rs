// ── Region-derived client factory ──
//
// Turns the currently selected region into configured API clients. The
// factory is the single place that raises the two service-configuration
// errors: nothing selected, and a region without a sidecar deployment.

use std::sync::Arc;

use secrecy::SecretString;

use oba_api::{Client, ClientConfig, TransportConfig};

use crate::error::CoreError;
use crate::regions::RegionsService;

/// Builds API clients for whatever region is currently selected.
pub struct ServiceFactory {
    regions: Arc<RegionsService>,
    transport: TransportConfig,
    api_key: SecretString,
    app_uid: String,
    app_ver: String,
}

impl ServiceFactory {
    pub fn new(
        regions: Arc<RegionsService>,
        transport: TransportConfig,
        api_key: SecretString,
        app_uid: String,
        app_ver: String,
    ) -> Self {
        Self {
            regions,
            transport,
            api_key,
            app_uid,
            app_ver,
        }
    }

    /// A `where`-API client for the currently selected region.
    pub fn rest_client(&self) -> Result<Client, CoreError> {
        let region = self
            .regions
            .current_region()
            .ok_or(CoreError::RegionNotSelected)?;

        let config = ClientConfig {
            base_url: region.base_url.clone(),
            api_key: self.api_key.clone(),
            app_uid: self.app_uid.clone(),
            app_ver: self.app_ver.clone(),
            region_id: Some(region.id),
        };
        Ok(Client::new(&config, &self.transport)?)
    }

    /// A client for the selected region's sidecar (survey/deep-link)
    /// service.
    pub fn sidecar_client(&self) -> Result<Client, CoreError> {
        let region = self
            .regions
            .current_region()
            .ok_or(CoreError::RegionNotSelected)?;
        let base_url = region
            .sidecar_base_url
            .clone()
            .ok_or(CoreError::SurveyServiceNotConfigured)?;

        let config = ClientConfig {
            base_url,
            api_key: self.api_key.clone(),
            app_uid: self.app_uid.clone(),
            app_ver: self.app_ver.clone(),
            region_id: Some(region.id),
        };
        Ok(Client::new(&config, &self.transport)?)
    }
}
