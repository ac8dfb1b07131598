//! Directional indicator collaborator
//!
//! The host renderer owns the actual mesh (cone, arrow, ...). The session
//! drives it through the [`Indicator`] trait so the guidance loop can run
//! without a rendering context.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Local axis of the indicator mesh that should point at the target
pub const INDICATOR_FORWARD: Vec3 = Vec3::Z;

/// Rendering side effects the guidance loop needs
pub trait Indicator {
    /// Point the indicator along a unit direction
    fn set_orientation(&mut self, direction: Vec3);

    /// Show or hide the indicator
    fn set_visible(&mut self, visible: bool);

    /// Set the indicator length along its forward axis
    fn set_scale(&mut self, scale: f32);

    /// Move the indicator anchor
    fn set_position(&mut self, _position: Vec3) {}
}

/// Plain-data indicator that records what the loop asked for
///
/// Used directly by hosts that pull a snapshot each frame (the WASM
/// binding does this) and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorState {
    /// Anchor position in tracking space
    pub position: Vec3,
    /// Rotation taking [`INDICATOR_FORWARD`] onto the guidance direction
    pub rotation: Quat,
    /// Direction the indicator points along
    pub direction: Vec3,
    /// Length along the forward axis
    pub scale: f32,
    /// Whether the indicator should be drawn
    pub visible: bool,
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            direction: INDICATOR_FORWARD,
            scale: 1.0,
            visible: false,
        }
    }
}

impl IndicatorState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Indicator for IndicatorState {
    fn set_orientation(&mut self, direction: Vec3) {
        self.direction = direction;
        self.rotation = Quat::from_rotation_arc(INDICATOR_FORWARD, direction);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

impl<I: Indicator + ?Sized> Indicator for Box<I> {
    fn set_orientation(&mut self, direction: Vec3) {
        (**self).set_orientation(direction);
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }

    fn set_scale(&mut self, scale: f32) {
        (**self).set_scale(scale);
    }

    fn set_position(&mut self, position: Vec3) {
        (**self).set_position(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_rotates_forward_axis() {
        let mut indicator = IndicatorState::new();
        assert!(!indicator.visible);

        indicator.set_orientation(Vec3::X);
        let pointed = indicator.rotation * INDICATOR_FORWARD;
        assert!((pointed - Vec3::X).length() < 1e-5);

        // Opposite of the forward axis is a valid target too
        indicator.set_orientation(Vec3::NEG_Z);
        let pointed = indicator.rotation * INDICATOR_FORWARD;
        assert!((pointed - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_boxed_indicator_forwards() {
        let mut boxed: Box<IndicatorState> = Box::default();
        boxed.set_visible(true);
        boxed.set_scale(0.25);
        boxed.set_position(Vec3::Y);
        assert!(boxed.visible);
        assert_eq!(boxed.scale, 0.25);
        assert_eq!(boxed.position, Vec3::Y);
    }
}
