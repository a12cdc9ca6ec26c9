// ── Regions service ──
//
// Owns the list of known regions and the current selection. Seeds from
// the preference store (falling back to a bundled snapshot), refreshes
// from the discovery service on a throttled schedule, and fans out
// changes through watch/broadcast channels. Construction never performs
// network I/O.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use oba_api::RegionsClient;

use crate::error::CoreError;
use crate::location::LocationProvider;
use crate::model::Region;
use crate::store::RegionsStore;

const EVENT_CHANNEL_SIZE: usize = 32;

/// Bundled fallback region list for first launch with no network and no
/// persisted state.
const BUNDLED_REGIONS: &str = include_str!("../data/regions-snapshot.json");

/// Tuning for [`RegionsService`].
#[derive(Debug, Clone)]
pub struct RegionsServiceConfig {
    /// Minimum age of the region list before a non-forced refresh hits
    /// the network.
    pub refresh_interval: Duration,
    /// Pick a region from the device location automatically.
    pub automatically_select_region: bool,
}

impl Default for RegionsServiceConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(7 * 24 * 60 * 60),
            automatically_select_region: true,
        }
    }
}

/// Edge notifications that aren't plain state changes. State changes
/// themselves (region list, current region) are observed through the
/// watch channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionsEvent {
    /// A non-forced refresh was skipped because the list is fresh enough.
    UpdateSkipped,
    /// A refresh hit the network and failed; state is untouched.
    UpdateFailed { message: String },
    /// No known region contains the device location.
    UnableToSelectRegion,
}

/// The region-selection state machine.
pub struct RegionsService {
    client: RegionsClient,
    store: RegionsStore,
    location: Arc<dyn LocationProvider>,
    refresh_interval: Duration,
    auto_select: AtomicBool,
    regions: watch::Sender<Arc<Vec<Region>>>,
    current_region: watch::Sender<Option<Region>>,
    last_updated: watch::Sender<Option<DateTime<Utc>>>,
    events: broadcast::Sender<RegionsEvent>,
}

impl RegionsService {
    /// Create the service, seeded from persisted state or the bundled
    /// snapshot, and run an initial location-based selection if automatic
    /// selection is on (or nothing is selected yet).
    pub fn new(
        client: RegionsClient,
        store: RegionsStore,
        location: Arc<dyn LocationProvider>,
        config: &RegionsServiceConfig,
    ) -> Result<Self, CoreError> {
        let seeded = match store.load_regions()? {
            Some(regions) if !regions.is_empty() => regions,
            _ => serde_json::from_str(BUNDLED_REGIONS)?,
        };
        let current = store.load_current_region()?;
        let last_updated = store.last_updated()?;

        let (regions, _) = watch::channel(Arc::new(seeded));
        let (current_region, _) = watch::channel(current);
        let (last_updated, _) = watch::channel(last_updated);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_SIZE);

        let service = Self {
            client,
            store,
            location,
            refresh_interval: config.refresh_interval,
            auto_select: AtomicBool::new(config.automatically_select_region),
            regions,
            current_region,
            last_updated,
            events,
        };

        if service.automatically_select_region() || service.current_region().is_none() {
            service.select_region_from_location()?;
        }

        Ok(service)
    }

    // ── Observation ──────────────────────────────────────────────────

    pub fn regions(&self) -> Arc<Vec<Region>> {
        self.regions.borrow().clone()
    }

    pub fn subscribe_regions(&self) -> watch::Receiver<Arc<Vec<Region>>> {
        self.regions.subscribe()
    }

    pub fn current_region(&self) -> Option<Region> {
        self.current_region.borrow().clone()
    }

    pub fn subscribe_current_region(&self) -> watch::Receiver<Option<Region>> {
        self.current_region.subscribe()
    }

    /// When the region list last refreshed successfully, across runs.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        *self.last_updated.borrow()
    }

    /// Subscribe to edge notifications. Zero subscribers is fine; events
    /// sent then are simply dropped.
    pub fn events(&self) -> broadcast::Receiver<RegionsEvent> {
        self.events.subscribe()
    }

    pub fn automatically_select_region(&self) -> bool {
        self.auto_select.load(Ordering::Relaxed)
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Explicitly select a region.
    ///
    /// No-op when `region` equals the current selection; otherwise the
    /// choice is persisted and observers notified, regardless of the
    /// automatic-selection flag.
    pub fn set_current_region(&self, region: Region) -> Result<(), CoreError> {
        if self.current_region.borrow().as_ref() == Some(&region) {
            return Ok(());
        }

        debug!(region = %region.name, "current region changed");
        self.store.save_current_region(&region)?;
        self.current_region.send_replace(Some(region));
        Ok(())
    }

    /// Toggle automatic selection. Turning it on re-runs the
    /// location-based selection immediately rather than waiting for the
    /// next location update.
    pub fn set_automatically_select_region(&self, enabled: bool) -> Result<(), CoreError> {
        self.auto_select.store(enabled, Ordering::Relaxed);
        if enabled {
            self.select_region_from_location()?;
        }
        Ok(())
    }

    /// Pick the first region (list order) whose bounds contain the device
    /// location.
    ///
    /// No location available: selection stays unresolved, silently. No
    /// matching region: [`RegionsEvent::UnableToSelectRegion`] is
    /// broadcast and the selection is left alone.
    pub fn select_region_from_location(&self) -> Result<(), CoreError> {
        let Some(location) = self.location.current_location() else {
            return Ok(());
        };

        let regions = self.regions();
        match regions.iter().find(|region| region.contains(location)) {
            Some(region) => self.set_current_region(region.clone()),
            None => {
                warn!("no known region contains the current location");
                let _ = self.events.send(RegionsEvent::UnableToSelectRegion);
                Ok(())
            }
        }
    }

    // ── Refresh ──────────────────────────────────────────────────────

    /// Refresh the region list from the discovery service.
    ///
    /// Without `force`, the fetch is skipped while the list is younger
    /// than the configured interval; [`RegionsEvent::UpdateSkipped`] is
    /// broadcast instead. On success the list is replaced wholesale,
    /// persisted, stamped, and automatic selection re-runs. On failure
    /// nothing changes. Returns whether a fetch actually ran.
    pub async fn update_regions_list(&self, force: bool) -> Result<bool, CoreError> {
        if !force && self.is_fresh() {
            debug!("region list is fresh; skipping refresh");
            let _ = self.events.send(RegionsEvent::UpdateSkipped);
            return Ok(false);
        }

        let wire = match self.client.regions().await {
            Ok(wire) => wire,
            Err(e) => {
                warn!(error = %e, "region list refresh failed");
                let _ = self.events.send(RegionsEvent::UpdateFailed {
                    message: e.to_string(),
                });
                return Err(e.into());
            }
        };

        let fresh: Vec<Region> = wire
            .into_iter()
            .filter_map(|raw| match Region::try_from(raw) {
                Ok(region) => Some(region),
                Err(e) => {
                    warn!(error = %e, "skipping malformed region");
                    None
                }
            })
            .collect();

        // An empty fleet of regions is never a plausible wholesale
        // replacement; treat it like a failed fetch.
        if fresh.is_empty() {
            let _ = self.events.send(RegionsEvent::UpdateFailed {
                message: "discovery service returned an empty region list".to_owned(),
            });
            return Err(CoreError::EmptyRegionList);
        }

        debug!(count = fresh.len(), "region list refreshed");
        self.store.save_regions(&fresh)?;
        self.regions.send_replace(Arc::new(fresh));

        let now = Utc::now();
        self.store.stamp_last_updated(now)?;
        self.last_updated.send_replace(Some(now));

        if self.automatically_select_region() {
            self.select_region_from_location()?;
        }

        Ok(true)
    }

    fn is_fresh(&self) -> bool {
        let Some(last) = *self.last_updated.borrow() else {
            return false;
        };
        let Ok(interval) = chrono::Duration::from_std(self.refresh_interval) else {
            return false;
        };
        Utc::now() - last < interval
    }

    // ── Background refresh ───────────────────────────────────────────

    /// Spawn a task that checks every `check_every` whether the throttle
    /// window has lapsed, refreshing when it has. Cancel through `cancel`.
    pub fn spawn_periodic_refresh(
        self: Arc<Self>,
        check_every: Duration,
        cancel: CancellationToken,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(check_every);
            interval.tick().await; // consume the immediate first tick

            loop {
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => break,
                    _ = interval.tick() => {
                        if let Err(e) = self.update_regions_list(false).await {
                            warn!(error = %e, "periodic region refresh failed");
                        }
                    }
                }
            }
        })
    }
}
