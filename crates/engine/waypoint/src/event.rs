//! Observable events emitted by the navigation session

use crate::Marker;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Something collaborators may react to (notify the user, play a sound, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GuidanceEvent {
    /// A marker was saved
    MarkerAdded { index: usize, position: Vec3 },
    /// Navigation toward a marker began
    NavigationStarted { index: usize, target: Marker },
    /// Navigation ended (explicitly or by auto-stop)
    NavigationStopped,
    /// Viewer came within the arrival threshold of the target
    Arrived { index: usize, distance: f32 },
    /// Viewer moved back out of the arrival threshold
    Departed { index: usize, distance: f32 },
    /// Viewer is exactly at the target; the previous direction is held
    DirectionDegenerate { index: usize },
}

impl GuidanceEvent {
    /// Short name for logs and UIs
    pub fn name(&self) -> &'static str {
        match self {
            GuidanceEvent::MarkerAdded { .. } => "marker_added",
            GuidanceEvent::NavigationStarted { .. } => "navigation_started",
            GuidanceEvent::NavigationStopped => "navigation_stopped",
            GuidanceEvent::Arrived { .. } => "arrived",
            GuidanceEvent::Departed { .. } => "departed",
            GuidanceEvent::DirectionDegenerate { .. } => "direction_degenerate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = GuidanceEvent::Arrived {
            index: 1,
            distance: 0.05,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GuidanceEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
        assert_eq!(back.name(), "arrived");
    }
}
