//! XR session lifecycle around the navigation session
//!
//! The host negotiates the immersive session and reference space
//! asynchronously. Frames are only fed to the guidance loop once that has
//! completed, so there is never a frame without a reference space behind it.

use crate::{
    Command, Error, GuidanceConfig, GuidanceEvent, GuidanceFrame, Indicator, IndicatorState,
    NavigationSession, Pose, Result,
};
use serde::{Deserialize, Serialize};

/// Host XR session state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum XrLifecycle {
    /// Session requested, reference space not yet confirmed
    #[default]
    AwaitingSession,
    /// Session and reference space ready; frames are processed
    Active,
    /// Host reported that immersive AR is not available
    Unsupported { reason: String },
    /// Session ended by the user or the host
    Ended,
}

impl XrLifecycle {
    pub fn is_active(&self) -> bool {
        matches!(self, XrLifecycle::Active)
    }
}

impl std::fmt::Display for XrLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingSession => write!(f, "AwaitingSession"),
            Self::Active => write!(f, "Active"),
            Self::Unsupported { .. } => write!(f, "Unsupported"),
            Self::Ended => write!(f, "Ended"),
        }
    }
}

/// Navigation session gated by the XR lifecycle
///
/// This is what a host wires up: lifecycle callbacks from session
/// negotiation, one [`frame`](Self::frame) call per animation frame, and
/// [`command`](Self::command) for UI actions.
#[derive(Debug)]
pub struct ArNavigator<I: Indicator = IndicatorState> {
    lifecycle: XrLifecycle,
    session: NavigationSession<I>,
    current_pose: Option<Pose>,
    frames_processed: u64,
}

impl ArNavigator<IndicatorState> {
    pub fn new(config: GuidanceConfig) -> Result<Self> {
        Self::with_indicator(config, IndicatorState::new())
    }
}

impl<I: Indicator> ArNavigator<I> {
    pub fn with_indicator(config: GuidanceConfig, indicator: I) -> Result<Self> {
        Ok(Self {
            lifecycle: XrLifecycle::AwaitingSession,
            session: NavigationSession::with_indicator(config, indicator)?,
            current_pose: None,
            frames_processed: 0,
        })
    }

    /// The host confirmed the session and its reference space
    pub fn session_started(&mut self) -> Result<()> {
        if let XrLifecycle::Unsupported { reason } = &self.lifecycle {
            return Err(Error::UnsupportedEnvironment(reason.clone()));
        }
        if !self.lifecycle.is_active() {
            tracing::debug!(from = %self.lifecycle, "XR session active");
            self.lifecycle = XrLifecycle::Active;
        }
        Ok(())
    }

    /// The host cannot provide immersive AR
    ///
    /// Returns the error to surface to the user. Only the first report is
    /// logged; the rest of the process keeps working without AR.
    pub fn session_unsupported(&mut self, reason: impl Into<String>) -> Error {
        let reason = reason.into();
        if !matches!(self.lifecycle, XrLifecycle::Unsupported { .. }) {
            tracing::warn!("Immersive AR unavailable: {}", reason);
            self.lifecycle = XrLifecycle::Unsupported {
                reason: reason.clone(),
            };
            self.current_pose = None;
            if self.session.is_navigating() {
                self.session.stop_navigation();
            }
        }
        Error::UnsupportedEnvironment(reason)
    }

    /// The session ended; the next session gets a fresh reference space
    ///
    /// Navigation stops because the saved target no longer shares a
    /// coordinate frame with future poses. Markers are kept.
    pub fn session_ended(&mut self) {
        if !self.lifecycle.is_active() {
            return;
        }
        tracing::debug!("XR session ended");
        self.lifecycle = XrLifecycle::Ended;
        self.current_pose = None;
        if self.session.is_navigating() {
            self.session.stop_navigation();
        }
    }

    /// Process one animation frame
    ///
    /// `pose` is `None` when tracking was lost for this frame; a non-finite
    /// pose is treated the same way. Frames before the session is active are
    /// ignored.
    pub fn frame(&mut self, pose: Option<Pose>) -> Option<GuidanceFrame> {
        if !self.lifecycle.is_active() {
            tracing::trace!(lifecycle = %self.lifecycle, "Ignoring frame outside active session");
            return None;
        }

        if pose.is_some_and(|p| !p.is_finite()) {
            tracing::warn!("Non-finite pose, treating frame as tracking lost");
        }
        self.current_pose = pose.filter(Pose::is_finite);
        let pose = self.current_pose?;
        self.frames_processed += 1;
        self.session.update(&pose)
    }

    /// Apply a UI action
    pub fn command(&mut self, command: Command) -> Result<()> {
        if command.needs_pose() && !self.lifecycle.is_active() {
            return Err(Error::NoActiveSession);
        }
        self.session.apply(command, self.current_pose.as_ref())
    }

    pub fn lifecycle(&self) -> &XrLifecycle {
        &self.lifecycle
    }

    pub fn session(&self) -> &NavigationSession<I> {
        &self.session
    }

    /// Pose from the most recent processed frame
    pub fn current_pose(&self) -> Option<&Pose> {
        self.current_pose.as_ref()
    }

    /// Frames that reached the guidance loop
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn drain_events(&mut self) -> Vec<GuidanceEvent> {
        self.session.drain_events()
    }
}
