//! User actions consumed by the navigation session

use serde::{Deserialize, Serialize};

/// Action dispatched by the host UI
///
/// The host maps its own input events (button clicks, controller select)
/// onto these and hands them to [`NavigationSession::apply`](crate::NavigationSession::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Save the current pose as a new marker
    AddMarker,
    /// Begin guiding toward the marker at `index`
    StartNavigation { index: usize },
    /// Begin guiding toward the most recently added marker
    NavigateToLatest,
    /// Stop guiding and hide the indicator
    StopNavigation,
}

impl Command {
    pub fn start(index: usize) -> Self {
        Command::StartNavigation { index }
    }

    /// Whether the command needs a current pose to execute
    pub fn needs_pose(&self) -> bool {
        matches!(self, Command::AddMarker)
    }
}
