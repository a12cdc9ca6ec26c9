// ── Core error types ──
//
// Consumer-facing errors from oba-core. Transport-layer errors are
// wrapped, not re-exposed raw, except where a domain-specific variant
// says more.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Service configuration ────────────────────────────────────────
    #[error("No region selected")]
    RegionNotSelected,

    #[error("Survey service not configured for this region")]
    SurveyServiceNotConfigured,

    // ── Region data ──────────────────────────────────────────────────
    #[error("Region {id} is malformed: {reason}")]
    InvalidRegion { id: i64, reason: String },

    #[error("Discovery service returned an empty region list")]
    EmptyRegionList,

    // ── Persistence ──────────────────────────────────────────────────
    #[error("Preference store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preference store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ── API errors (wrapped) ─────────────────────────────────────────
    #[error("API error: {0}")]
    Api(oba_api::Error),
}

impl From<oba_api::Error> for CoreError {
    fn from(err: oba_api::Error) -> Self {
        Self::Api(err)
    }
}
