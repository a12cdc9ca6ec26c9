// Agency alert feed: GTFS-realtime service alerts fetched per agency as
// binary protobuf, filtered to agency-wide scope before conversion into
// the app-facing model.

pub mod feed;

use prost::Message;
use tokio::task::JoinSet;
use tracing::warn;

use crate::error::Error;
use crate::models::AgencyWithCoverage;

use crate::client::Client;

// ── Model ────────────────────────────────────────────────────────────

/// An alert that applies to an entire agency rather than a specific
/// route, stop, or trip.
#[derive(Debug, Clone, PartialEq)]
pub struct AgencyAlert {
    /// Feed-entity ID, unique within one agency's feed.
    pub id: String,
    pub agency_id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub url: Option<String>,
    pub active_windows: Vec<feed::TimeRange>,
    pub cause: feed::Cause,
    pub effect: feed::Effect,
}

impl AgencyAlert {
    /// Build from a feed entity, if it carries an agency-wide alert for
    /// `agency_id`.
    fn from_entity(entity: &feed::FeedEntity, agency_id: &str) -> Option<Self> {
        if entity.is_deleted == Some(true) {
            return None;
        }
        let alert = entity.alert.as_ref()?;
        if !is_agency_wide(alert, agency_id) {
            return None;
        }

        Some(Self {
            id: entity.id.clone(),
            agency_id: agency_id.to_owned(),
            title: best_translation(alert.header_text.as_ref()),
            body: best_translation(alert.description_text.as_ref()),
            url: best_translation(alert.url.as_ref()),
            active_windows: alert.active_period.clone(),
            cause: alert.cause(),
            effect: alert.effect(),
        })
    }
}

/// An alert is agency-wide when some informed entity names the agency and
/// nothing narrower.
fn is_agency_wide(alert: &feed::Alert, agency_id: &str) -> bool {
    alert.informed_entity.iter().any(|selector| {
        selector.agency_id.as_deref() == Some(agency_id)
            && selector.route_id.is_none()
            && selector.stop_id.is_none()
            && selector.trip.is_none()
    })
}

/// Prefer an English translation, then an untagged one, then whatever
/// comes first.
fn best_translation(text: Option<&feed::TranslatedString>) -> Option<String> {
    let translations = &text?.translation;

    translations
        .iter()
        .find(|t| matches!(t.language.as_deref(), Some("en") | None))
        .or_else(|| translations.first())
        .map(|t| t.text.clone())
}

// ── Fetching ─────────────────────────────────────────────────────────

impl Client {
    /// Fetch one agency's GTFS-realtime alert feed and keep the
    /// agency-wide alerts.
    pub async fn alerts_for_agency(&self, agency_id: &str) -> Result<Vec<AgencyAlert>, Error> {
        let path = format!("api/gtfs_realtime/alerts-for-agency/{agency_id}.pb");
        let bytes = self.get_bytes(&path, &[]).await?;
        let message = feed::FeedMessage::decode(bytes.as_slice())?;

        Ok(message
            .entity
            .iter()
            .filter_map(|entity| AgencyAlert::from_entity(entity, agency_id))
            .collect())
    }

    /// Fan out one fetch per agency and flatten the union.
    ///
    /// One child task per agency; a failing agency is logged and
    /// contributes zero alerts, never aborting its siblings. The parent
    /// returns only once every child has finished. Result order across
    /// agencies is unspecified.
    pub async fn alerts(&self, agencies: &[AgencyWithCoverage]) -> Vec<AgencyAlert> {
        let mut tasks = JoinSet::new();

        for agency in agencies {
            let client = self.clone();
            let agency_id = agency.agency_id.clone();
            tasks.spawn(async move {
                match client.alerts_for_agency(&agency_id).await {
                    Ok(alerts) => alerts,
                    Err(e) => {
                        warn!(agency = %agency_id, error = %e, "alert fetch failed; continuing without this agency");
                        Vec::new()
                    }
                }
            });
        }

        let mut all = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(alerts) => all.extend(alerts),
                Err(e) => warn!(error = %e, "alert fetch task aborted"),
            }
        }
        all
    }

    /// The whole-region pipeline: agencies-with-coverage, then the
    /// per-agency fan-out.
    pub async fn regional_alerts(&self) -> Result<Vec<AgencyAlert>, Error> {
        let agencies = self.agencies_with_coverage().await?;
        Ok(self.alerts(&agencies.list).await)
    }
}
