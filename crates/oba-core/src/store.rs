// ── Filesystem preference store ──
//
// The persistence seam for region state: three small JSON documents under
// an explicitly passed data directory. Tests point this at a tempdir;
// applications pass their platform data dir.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CoreError;
use crate::model::Region;

const REGIONS_FILE: &str = "regions.json";
const CURRENT_REGION_FILE: &str = "current-region.json";
const LAST_UPDATED_FILE: &str = "last-updated.json";

/// Persists the region list, the current selection, and the list's
/// last-updated stamp.
#[derive(Debug, Clone)]
pub struct RegionsStore {
    dir: PathBuf,
}

impl RegionsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load_regions(&self) -> Result<Option<Vec<Region>>, CoreError> {
        self.read_json(REGIONS_FILE)
    }

    pub fn save_regions(&self, regions: &[Region]) -> Result<(), CoreError> {
        self.write_json(REGIONS_FILE, &regions)
    }

    pub fn load_current_region(&self) -> Result<Option<Region>, CoreError> {
        self.read_json(CURRENT_REGION_FILE)
    }

    pub fn save_current_region(&self, region: &Region) -> Result<(), CoreError> {
        self.write_json(CURRENT_REGION_FILE, region)
    }

    pub fn last_updated(&self) -> Result<Option<DateTime<Utc>>, CoreError> {
        self.read_json(LAST_UPDATED_FILE)
    }

    pub fn stamp_last_updated(&self, at: DateTime<Utc>) -> Result<(), CoreError> {
        self.write_json(LAST_UPDATED_FILE, &at)
    }

    // ── JSON file helpers ────────────────────────────────────────────

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, CoreError> {
        let path = self.dir.join(file);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write_json<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<(), CoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string_pretty(value)?;
        std::fs::write(self.dir.join(file), raw)?;
        Ok(())
    }
}
