// ── Region domain model ──
//
// A region is one OBA server deployment plus the geography it covers.
// Regions arrive from the discovery service and are replaced wholesale
// when a fresh list lands -- never partially patched.

use geo::{Contains, Rect, coord, point};
use serde::{Deserialize, Serialize};
use url::Url;

/// A geographic coordinate, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One rectangular coverage box: a center point plus full spans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBound {
    pub lat: f64,
    pub lon: f64,
    pub lat_span: f64,
    pub lon_span: f64,
}

impl RegionBound {
    /// The bound as an axis-aligned rect (x = longitude, y = latitude).
    fn rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.lon - self.lon_span / 2.0, y: self.lat - self.lat_span / 2.0 },
            coord! { x: self.lon + self.lon_span / 2.0, y: self.lat + self.lat_span / 2.0 },
        )
    }

    pub fn contains(&self, location: Coordinate) -> bool {
        self.rect()
            .contains(&point! { x: location.longitude, y: location.latitude })
    }
}

/// A transit region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
    /// Root of the region's `where` API.
    pub base_url: Url,
    /// Root of the region's sidecar (survey/deep-link) service, when one
    /// is deployed.
    #[serde(default)]
    pub sidecar_base_url: Option<Url>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub experimental: bool,
    #[serde(default)]
    pub supports_realtime: bool,
    #[serde(default)]
    pub supports_discovery: bool,
    #[serde(default)]
    pub bounds: Vec<RegionBound>,
}

impl Region {
    /// True when `location` falls within the union of this region's
    /// coverage boxes.
    pub fn contains(&self, location: Coordinate) -> bool {
        self.bounds.iter().any(|bound| bound.contains(location))
    }
}
