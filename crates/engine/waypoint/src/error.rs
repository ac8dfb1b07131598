//! Error types for the waypoint crate

use thiserror::Error;

/// Result type alias for guidance operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while placing markers and navigating
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Marker index outside `[0, len)` on start-navigation
    #[error("Invalid marker index {index} (have {len} markers)")]
    InvalidMarkerIndex { index: usize, len: usize },

    /// Pose-dependent action attempted before the XR session is active
    #[error("No active XR session")]
    NoActiveSession,

    /// Pose with a NaN or infinite component
    #[error("Pose is not finite")]
    NonFinitePose,

    /// Host XR capability missing
    #[error("Unsupported environment: {0}")]
    UnsupportedEnvironment(String),

    /// Current position equals the target position, so no direction exists
    #[error("Degenerate direction: viewer is at the target position")]
    DegenerateDirection,

    /// Configuration value out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
