//! Viewer pose as reported by the host tracking system

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Tracked viewer pose for a single frame
///
/// Positions are meters in the reference space established when the XR
/// session started. The guidance loop only reads `position`; `orientation`
/// is used to place markers ahead of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in tracking space
    pub position: Vec3,
    /// Orientation in tracking space
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    /// Create a pose with identity orientation
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    /// Create a pose from a position and orientation
    pub fn from_position_orientation(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation: orientation.normalize(),
        }
    }

    /// Forward direction (local -Z rotated into tracking space)
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Point `distance` meters in front of the viewer
    pub fn point_ahead(&self, distance: f32) -> Vec3 {
        self.position + self.forward() * distance
    }

    /// Whether every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.orientation.is_finite()
    }
}
