//! Saved markers and the ordered marker list

use crate::{Error, Pose, Result};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A location the user saved
///
/// Markers are value snapshots of a pose. Once created they never change,
/// so moving the viewer afterwards cannot affect a saved target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Saved position in tracking space
    pub position: Vec3,
    /// Saved orientation in tracking space
    pub orientation: Quat,
}

impl Marker {
    /// Snapshot a pose, optionally pushed `placement_distance` meters ahead
    pub fn from_pose(pose: &Pose, placement_distance: f32) -> Self {
        Self {
            position: pose.point_ahead(placement_distance),
            orientation: pose.orientation,
        }
    }
}

/// Append-only, index-addressed list of markers
#[derive(Debug, Clone, Default)]
pub struct MarkerList {
    markers: Vec<Marker>,
}

impl MarkerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a marker and return its index
    pub fn push(&mut self, marker: Marker) -> usize {
        self.markers.push(marker);
        self.markers.len() - 1
    }

    /// Look up a marker by index
    pub fn get(&self, index: usize) -> Result<Marker> {
        self.markers
            .get(index)
            .copied()
            .ok_or(Error::InvalidMarkerIndex {
                index,
                len: self.markers.len(),
            })
    }

    /// Most recently added marker
    pub fn last(&self) -> Option<(usize, Marker)> {
        self.markers.last().map(|m| (self.markers.len() - 1, *m))
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iterate markers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }
}
