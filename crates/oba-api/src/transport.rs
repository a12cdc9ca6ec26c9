// Shared transport configuration for building reqwest::Client instances.
//
// The `where` client, the regions client, and sidecar clients all share
// timeout and user-agent settings through this module.

use std::time::Duration;

use crate::error::Error;

/// Default per-request timeout. There is no separate application-level
/// timeout layered on top of the transport one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("oba-rs/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    ///
    /// Gzip response decompression is always on -- the upstream servers
    /// expect `Accept-Encoding: gzip` on every request, and reqwest's
    /// gzip support supplies the header and the inflation.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(Error::Transport)
    }
}
