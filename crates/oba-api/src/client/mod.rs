// The `where` API HTTP client.
//
// Wraps `reqwest::Client` with OBA-specific URL construction, response
// classification, and envelope unwrapping. Endpoint groups (stops,
// arrivals, trips, agencies, problem reports) are implemented as inherent
// methods in separate files to keep this module focused on transport
// mechanics.

mod agencies;
mod arrivals;
mod problems;
mod stops;
mod trips;

pub use problems::{StopProblemCode, StopProblemReport, TripProblemCode, TripProblemReport};
pub use stops::StopsForLocationOptions;
pub use trips::TripDetailsQuery;

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::envelope::{self, EntryResult, ListResult};
use crate::error::Error;
use crate::transport::TransportConfig;
use crate::urls::UrlBuilder;

// ── Configuration ────────────────────────────────────────────────────

/// Where to talk and the identity every request carries.
///
/// Immutable once built -- switching regions means building a new
/// [`Client`] from a new config.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// The region's `where` API root, e.g.
    /// `https://api.pugetsound.onebusaway.org/`.
    pub base_url: Url,
    pub api_key: SecretString,
    /// Stable per-install identifier, sent as `app_uid`.
    pub app_uid: String,
    /// Consumer application version, sent as `app_ver`.
    pub app_ver: String,
    pub region_id: Option<i64>,
}

impl ClientConfig {
    /// The query items appended to every request.
    fn default_query(&self) -> Vec<(String, String)> {
        let mut items = vec![
            ("key".to_owned(), self.api_key.expose_secret().to_owned()),
            ("app_uid".to_owned(), self.app_uid.clone()),
            ("app_ver".to_owned(), self.app_ver.clone()),
            ("version".to_owned(), "2".to_owned()),
        ];
        if let Some(region_id) = self.region_id {
            items.push(("regionId".to_owned(), region_id.to_string()));
        }
        items
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the OneBusAway `where` REST API.
///
/// Cheap to clone: the connection pool and URL builder are shared, so
/// concurrent fan-out (see `alerts`) clones freely. All endpoint methods
/// are `async` and classify failures into the closed [`Error`] taxonomy.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    urls: Arc<UrlBuilder>,
}

impl Client {
    /// Build a client with its own transport from `config`.
    pub fn new(config: &ClientConfig, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self::with_client(transport.build_client()?, config))
    }

    /// Wrap a pre-built `reqwest::Client`.
    ///
    /// Tests inject one pointed at a mock server.
    pub fn with_client(http: reqwest::Client, config: &ClientConfig) -> Self {
        let urls = Arc::new(UrlBuilder::new(
            config.base_url.clone(),
            config.default_query(),
        ));
        Self { http, urls }
    }

    /// The URL builder backing this client.
    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// GET an `entry`-shaped endpoint.
    pub(crate) async fn get_entry<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<EntryResult<T>, Error> {
        let body = self.get_json(path, query).await?;
        envelope::decode_entry(&body)
    }

    /// GET a `list`-shaped endpoint.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ListResult<T>, Error> {
        let body = self.get_json(path, query).await?;
        envelope::decode_list(&body)
    }

    /// GET a submission endpoint that answers with a bare status envelope.
    pub(crate) async fn get_status(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(), Error> {
        let body = self.get_json(path, query).await?;
        envelope::decode_status(&body)
    }

    /// GET `path` and run the full JSON response classification,
    /// returning the body once it is known to be a JSON payload.
    pub(crate) async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<String, Error> {
        let url = self.urls.url(path, query);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        classify_json_response(resp).await
    }

    /// GET a binary endpoint (the `.pb` alert feeds). Status
    /// classification only -- no content-type or envelope handling.
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<u8>, Error> {
        let url = self.urls.url(path, query);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        let resp = classify_status(resp)?;

        let body = resp.bytes().await?;
        if body.is_empty() {
            return Err(Error::NoResponseBody);
        }
        Ok(body.to_vec())
    }
}

// ── Response classification ──────────────────────────────────────────

/// Status-code classification shared by the JSON and binary paths:
/// 404 -> not found; any other non-2xx -> request failure; 200 with
/// `Content-Length: 0` -> not found (the server's way of spelling 404
/// for bogus IDs).
pub(crate) fn classify_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = resp.status();

    if !status.is_success() {
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::RequestNotFound);
        }
        return Err(Error::RequestFailure {
            status: status.as_u16(),
        });
    }

    if status == reqwest::StatusCode::OK && resp.content_length() == Some(0) {
        return Err(Error::RequestNotFound);
    }

    Ok(resp)
}

/// Full classification for JSON endpoints. After the status checks:
/// `text/html` means a captive portal got in the way; any other non-JSON
/// content type is rejected; an empty body is rejected; otherwise the
/// body text is handed back for envelope decoding.
pub(crate) async fn classify_json_response(resp: reqwest::Response) -> Result<String, Error> {
    let resp = classify_status(resp)?;

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    if content_type.starts_with("text/html") {
        return Err(Error::CaptivePortal);
    }
    // A missing content-type header is tolerated; the envelope decode
    // will reject anything that isn't actually JSON.
    if !content_type.is_empty() && !content_type.contains("json") {
        return Err(Error::InvalidContentType { content_type });
    }

    let body = resp.text().await?;
    if body.is_empty() {
        return Err(Error::NoResponseBody);
    }
    Ok(body)
}
