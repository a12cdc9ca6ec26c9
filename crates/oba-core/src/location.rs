// ── Location seam ──

use crate::model::Coordinate;

/// Where the device currently is. The platform location manager lives
/// behind this seam; tests and headless consumers use [`Fixed`].
pub trait LocationProvider: Send + Sync {
    /// The last known location, if any. Must never block waiting for a
    /// fresh fix.
    fn current_location(&self) -> Option<Coordinate>;
}

/// A provider pinned to a constant answer.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub Option<Coordinate>);

impl LocationProvider for Fixed {
    fn current_location(&self) -> Option<Coordinate> {
        self.0
    }
}
