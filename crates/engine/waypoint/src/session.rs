//! Navigation session: marker list, navigation state and the frame update

use crate::{
    compute_guidance, Command, Error, GuidanceConfig, GuidanceEvent, GuidanceFrame, Indicator,
    IndicatorState, Marker, MarkerList, Pose, Result,
};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Whether the session is currently guiding toward a marker
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum NavigationState {
    #[default]
    Idle,
    /// Guiding toward a snapshot of the marker at `index`
    Navigating { index: usize, target: Marker },
}

impl NavigationState {
    pub fn is_navigating(&self) -> bool {
        matches!(self, NavigationState::Navigating { .. })
    }

    /// Active target, if navigating
    pub fn target(&self) -> Option<(usize, Marker)> {
        match self {
            NavigationState::Navigating { index, target } => Some((*index, *target)),
            NavigationState::Idle => None,
        }
    }
}

/// Owns everything the guidance loop mutates
///
/// User actions go through [`apply`](Self::apply) (or the typed helpers) and
/// the host calls [`update`](Self::update) once per rendered frame. Both run
/// on the same thread, so no locking is involved.
#[derive(Debug)]
pub struct NavigationSession<I: Indicator = IndicatorState> {
    config: GuidanceConfig,
    markers: MarkerList,
    state: NavigationState,
    indicator: I,

    /// Last non-degenerate direction, held when the viewer stands on the target
    last_direction: Option<Vec3>,

    /// Arrival latch so `Arrived` fires once per approach
    arrived: bool,

    /// Degeneracy latch so `DirectionDegenerate` fires once per occurrence
    degenerate: bool,

    /// Pending events, drained by the host
    events: Vec<GuidanceEvent>,
}

impl NavigationSession<IndicatorState> {
    /// Create a session with a recording indicator
    pub fn new(config: GuidanceConfig) -> Result<Self> {
        Self::with_indicator(config, IndicatorState::new())
    }
}

impl<I: Indicator> NavigationSession<I> {
    /// Create a session driving a host-supplied indicator
    pub fn with_indicator(config: GuidanceConfig, mut indicator: I) -> Result<Self> {
        config.validate()?;
        indicator.set_visible(false);

        Ok(Self {
            config,
            markers: MarkerList::new(),
            state: NavigationState::Idle,
            indicator,
            last_direction: None,
            arrived: false,
            degenerate: false,
            events: Vec::new(),
        })
    }

    /// Apply a user action
    ///
    /// `pose` is the most recent tracked pose, required by
    /// [`Command::AddMarker`]. Without one the command fails with
    /// [`Error::NoActiveSession`] and nothing changes.
    pub fn apply(&mut self, command: Command, pose: Option<&Pose>) -> Result<()> {
        match command {
            Command::AddMarker => {
                let pose = pose.ok_or(Error::NoActiveSession)?;
                self.add_marker(pose)?;
            }
            Command::StartNavigation { index } => {
                self.start_navigation(index)?;
            }
            Command::NavigateToLatest => {
                self.start_navigation_to_latest()?;
            }
            Command::StopNavigation => self.stop_navigation(),
        }
        Ok(())
    }

    /// Save the pose as a new marker, returning its index and value
    ///
    /// A pose with non-finite components is rejected with
    /// [`Error::NonFinitePose`] and no marker is stored.
    pub fn add_marker(&mut self, pose: &Pose) -> Result<(usize, Marker)> {
        if !pose.is_finite() {
            tracing::warn!("Refusing to add marker at non-finite pose");
            return Err(Error::NonFinitePose);
        }

        let marker = Marker::from_pose(pose, self.config.placement_distance);
        let index = self.markers.push(marker);

        tracing::info!(index, position = %marker.position, "Marker added");
        self.events.push(GuidanceEvent::MarkerAdded {
            index,
            position: marker.position,
        });

        Ok((index, marker))
    }

    /// Start guiding toward the marker at `index`
    ///
    /// An out-of-range index returns [`Error::InvalidMarkerIndex`] and leaves
    /// the current state (including an ongoing navigation) untouched.
    pub fn start_navigation(&mut self, index: usize) -> Result<Marker> {
        let target = self.markers.get(index).inspect_err(|e| {
            tracing::warn!("Cannot start navigation: {}", e);
        })?;

        self.state = NavigationState::Navigating { index, target };
        self.last_direction = None;
        self.arrived = false;
        self.degenerate = false;
        self.indicator.set_visible(true);

        tracing::info!(index, position = %target.position, "Navigating to marker");
        self.events
            .push(GuidanceEvent::NavigationStarted { index, target });

        Ok(target)
    }

    /// Start guiding toward the most recently added marker
    ///
    /// Fails with [`Error::InvalidMarkerIndex`] when no marker exists.
    pub fn start_navigation_to_latest(&mut self) -> Result<Marker> {
        let (index, _) = self
            .markers
            .last()
            .ok_or(Error::InvalidMarkerIndex { index: 0, len: 0 })?;
        self.start_navigation(index)
    }

    /// Stop guiding, regardless of the current state
    pub fn stop_navigation(&mut self) {
        self.state = NavigationState::Idle;
        self.last_direction = None;
        self.arrived = false;
        self.degenerate = false;
        self.indicator.set_visible(false);

        tracing::info!("Navigation stopped");
        self.events.push(GuidanceEvent::NavigationStopped);
    }

    /// Run one guidance frame
    ///
    /// Returns `None` while idle. Non-finite poses are skipped; the next
    /// frame simply tries again.
    pub fn update(&mut self, pose: &Pose) -> Option<GuidanceFrame> {
        let (index, target) = self.state.target()?;

        if !pose.is_finite() {
            tracing::warn!("Skipping frame with non-finite pose");
            return None;
        }

        let frame = compute_guidance(
            pose.position,
            target.position,
            self.last_direction,
            &self.config,
        );

        if frame.degenerate {
            if !self.degenerate {
                tracing::debug!(index, "Viewer is on the target, holding direction");
                self.events
                    .push(GuidanceEvent::DirectionDegenerate { index });
            }
        } else {
            self.last_direction = Some(frame.direction);
        }
        self.degenerate = frame.degenerate;

        self.indicator
            .set_position(pose.position - Vec3::Y * self.config.indicator_drop);
        self.indicator.set_orientation(frame.direction);
        self.indicator.set_scale(frame.indicator_length);
        self.indicator.set_visible(true);

        tracing::trace!(
            index,
            distance = frame.distance,
            direction = %frame.direction,
            "Guidance frame"
        );

        if frame.arrived && !self.arrived {
            self.arrived = true;
            tracing::info!(index, distance = frame.distance, "Arrived at marker");
            self.events.push(GuidanceEvent::Arrived {
                index,
                distance: frame.distance,
            });

            if self.config.auto_stop_on_arrival {
                self.stop_navigation();
            }
        } else if !frame.arrived && self.arrived {
            self.arrived = false;
            tracing::debug!(index, distance = frame.distance, "Left arrival zone");
            self.events.push(GuidanceEvent::Departed {
                index,
                distance: frame.distance,
            });
        }

        Some(frame)
    }

    /// Take all pending events in the order they occurred
    pub fn drain_events(&mut self) -> Vec<GuidanceEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn is_navigating(&self) -> bool {
        self.state.is_navigating()
    }

    pub fn markers(&self) -> &MarkerList {
        &self.markers
    }

    pub fn config(&self) -> &GuidanceConfig {
        &self.config
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Whether the viewer is currently inside the arrival threshold
    pub fn has_arrived(&self) -> bool {
        self.arrived
    }
}
