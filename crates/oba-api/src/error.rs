use thiserror::Error;

/// Top-level error type for the `oba-api` crate.
///
/// A closed taxonomy: every failed call maps to exactly one case, across
/// the `where` REST client, the GTFS-realtime alert feed, and the regional
/// discovery service. `oba-core` translates these into domain-facing
/// diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A Wi-Fi gateway intercepted the request with an HTML sign-in page
    /// instead of letting it reach the real server.
    #[error("Captive portal detected -- sign in to this network in a browser")]
    CaptivePortal,

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── HTTP status ─────────────────────────────────────────────────
    /// The requested entity does not exist: HTTP 404, an envelope with an
    /// embedded 404 code, or the server's habit of answering 200 with an
    /// empty body for bogus IDs.
    #[error("Resource not found")]
    RequestNotFound,

    /// Any other non-2xx HTTP status.
    #[error("Request failed with HTTP status {status}")]
    RequestFailure { status: u16 },

    /// The response is not JSON where JSON was expected.
    #[error("Unexpected content type: {content_type}")]
    InvalidContentType { content_type: String },

    // ── Payload ─────────────────────────────────────────────────────
    /// A 2xx response with no body at all.
    #[error("Server returned an empty response body")]
    NoResponseBody,

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// The GTFS-realtime alert feed could not be decoded.
    #[error("Alert feed decode error: {0}")]
    FeedDecode(#[from] prost::DecodeError),

    /// Logical error embedded in the REST envelope's `code` field -- the
    /// server answers HTTP 200 even for these.
    #[error("API error (code {code}): {message}")]
    Api { code: u16, message: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// No retrying happens inside this crate; the predicate exists for
    /// callers that layer their own retry policy on top.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::CaptivePortal => true,
            Self::RequestFailure { status } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error, whichever of the
    /// server's three ways of expressing one produced it.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RequestNotFound)
    }
}
