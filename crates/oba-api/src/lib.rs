// oba-api: Async Rust client for the OneBusAway `where` REST API,
// GTFS-realtime alert feeds, and the regional discovery service.

pub mod alerts;
pub mod client;
pub mod envelope;
pub mod error;
pub mod models;
pub mod regions;
pub mod transport;
pub mod urls;

pub use alerts::AgencyAlert;
pub use client::{Client, ClientConfig};
pub use envelope::{EntryResult, ListResult};
pub use error::Error;
pub use regions::RegionsClient;
pub use transport::TransportConfig;
pub use urls::UrlBuilder;
