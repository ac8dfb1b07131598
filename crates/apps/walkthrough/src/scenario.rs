//! Scenario files: guidance config plus an ordered list of steps

use anyhow::{Context, Result};
use glam::{Quat, Vec3};
use serde::Deserialize;
use std::path::Path;
use waypoint::{GuidanceConfig, Pose};

/// A scripted AR walk loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Optional name shown in logs
    #[serde(default)]
    pub name: Option<String>,
    /// Guidance tunables (missing fields use defaults)
    #[serde(default)]
    pub guidance: GuidanceConfig,
    /// Steps replayed in order
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One thing that happens during a walk
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Host confirmed the XR session
    SessionStart,
    /// Host ended the XR session
    SessionEnd,
    /// Host reported AR as unavailable
    Unsupported { reason: String },
    /// Single frame at an explicit pose
    Pose {
        position: [f32; 3],
        /// Quaternion as `[x, y, z, w]`
        #[serde(default)]
        orientation: Option<[f32; 4]>,
    },
    /// Linear walk from the current position, one frame per step
    Walk { to: [f32; 3], frames: u32 },
    /// Frames with no tracked pose
    TrackingLost {
        #[serde(default = "default_lost_frames")]
        frames: u32,
    },
    /// Save the current pose as a marker
    AddMarker,
    /// Start navigation toward a marker index
    Navigate { index: usize },
    /// Start navigation toward the most recently added marker
    NavigateLatest,
    /// Stop navigation
    Stop,
}

fn default_lost_frames() -> u32 {
    1
}

impl Step {
    /// Pose described by a `pose` step, keeping `current` orientation if none given
    pub fn pose(position: [f32; 3], orientation: Option<[f32; 4]>, current: &Pose) -> Pose {
        let orientation = orientation
            .map(Quat::from_array)
            .unwrap_or(current.orientation);
        Pose::from_position_orientation(Vec3::from_array(position), orientation)
    }
}

impl Scenario {
    /// Parse a scenario from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(text).context("Failed to parse scenario")?;
        scenario.guidance.validate()?;
        Ok(scenario)
    }

    /// Load a scenario file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    /// Display name, falling back to a generic label
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed scenario")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let scenario = Scenario::from_toml_str(
            r#"
            name = "short"

            [guidance]
            auto_stop_on_arrival = true

            [[steps]]
            action = "session_start"

            [[steps]]
            action = "pose"
            position = [0.0, 1.6, 0.0]

            [[steps]]
            action = "walk"
            to = [1.0, 1.6, 0.0]
            frames = 10

            [[steps]]
            action = "navigate"
            index = 0

            [[steps]]
            action = "tracking_lost"

            [[steps]]
            action = "navigate_latest"
            "#,
        )
        .unwrap();

        assert_eq!(scenario.display_name(), "short");
        assert!(scenario.guidance.auto_stop_on_arrival);
        assert_eq!(scenario.guidance.arrival_threshold, 0.1);
        assert_eq!(
            scenario.steps,
            vec![
                Step::SessionStart,
                Step::Pose {
                    position: [0.0, 1.6, 0.0],
                    orientation: None
                },
                Step::Walk {
                    to: [1.0, 1.6, 0.0],
                    frames: 10
                },
                Step::Navigate { index: 0 },
                Step::TrackingLost { frames: 1 },
                Step::NavigateLatest,
            ]
        );
    }

    #[test]
    fn test_unknown_action_rejected() {
        let result = Scenario::from_toml_str(
            r#"
            [[steps]]
            action = "teleport"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_guidance_rejected() {
        let result = Scenario::from_toml_str(
            r#"
            [guidance]
            arrival_threshold = -1.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_pose_keeps_orientation() {
        let current = Pose::from_position_orientation(Vec3::ZERO, Quat::from_rotation_y(1.0));
        let pose = Step::pose([1.0, 2.0, 3.0], None, &current);
        assert_eq!(pose.position, Vec3::new(1.0, 2.0, 3.0));
        assert!(pose.orientation.abs_diff_eq(current.orientation, 1e-6));
    }
}
