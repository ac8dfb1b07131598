//! Per-frame guidance math
//!
//! Pure functions with no session state. [`NavigationSession`](crate::NavigationSession)
//! calls [`compute_guidance`] once per frame while navigating.

use crate::{Error, GuidanceConfig, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Direction used when no previous direction exists to hold
pub const DEFAULT_DIRECTION: Vec3 = Vec3::NEG_Z;

/// Result of one guidance frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuidanceFrame {
    /// Unit vector from the viewer toward the target
    pub direction: Vec3,
    /// Euclidean distance from the viewer to the target
    pub distance: f32,
    /// Indicator scale, `min(distance, cap)`
    pub indicator_length: f32,
    /// Distance is below the arrival threshold
    pub arrived: bool,
    /// Viewer and target coincide; `direction` is the held fallback
    pub degenerate: bool,
}

/// Unit vector pointing from `from` toward `to`
///
/// Fails with [`Error::DegenerateDirection`] when the two points coincide or
/// the difference cannot be normalized.
pub fn direction_between(from: Vec3, to: Vec3) -> Result<Vec3> {
    (to - from)
        .try_normalize()
        .ok_or(Error::DegenerateDirection)
}

/// Compute direction, distance and arrival for one frame
///
/// A degenerate direction is recovered here: `previous` (or
/// [`DEFAULT_DIRECTION`]) is returned instead and `degenerate` is set.
pub fn compute_guidance(
    position: Vec3,
    target: Vec3,
    previous: Option<Vec3>,
    config: &GuidanceConfig,
) -> GuidanceFrame {
    let distance = position.distance(target);

    let (direction, degenerate) = match direction_between(position, target) {
        Ok(direction) => (direction, false),
        Err(_) => (previous.unwrap_or(DEFAULT_DIRECTION), true),
    };

    GuidanceFrame {
        direction,
        distance,
        indicator_length: distance.min(config.indicator_cap_length),
        arrived: distance < config.arrival_threshold,
        degenerate,
    }
}
