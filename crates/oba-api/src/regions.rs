// Client for the regional discovery service -- a separate host from any
// region's `where` API, serving the canonical list of deployments.

use tracing::debug;
use url::Url;

use crate::client::classify_json_response;
use crate::envelope;
use crate::error::Error;
use crate::models::RegionResponse;
use crate::transport::TransportConfig;
use crate::urls::UrlBuilder;

/// Path of the current region-list document.
const REGIONS_PATH: &str = "regions-v3.json";

/// Async client for the regional discovery service.
#[derive(Clone)]
pub struct RegionsClient {
    http: reqwest::Client,
    urls: UrlBuilder,
}

impl RegionsClient {
    /// Build a client with its own transport against `base_url`
    /// (e.g. `https://regions.onebusaway.org`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self::with_client(transport.build_client()?, base_url))
    }

    /// Wrap a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        // The discovery document wants no API key or app identity.
        let urls = UrlBuilder::new(base_url, Vec::new());
        Self { http, urls }
    }

    /// Fetch the canonical region list.
    pub async fn regions(&self) -> Result<Vec<RegionResponse>, Error> {
        let url = self.urls.url(REGIONS_PATH, &[]);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        let body = classify_json_response(resp).await?;

        Ok(envelope::decode_list(&body)?.list)
    }
}
