//! Replays a scenario through an `ArNavigator`

use crate::{Scenario, Step};
use anyhow::Result;
use glam::Vec3;
use serde::Serialize;
use waypoint::{ArNavigator, Command, GuidanceEvent, GuidanceFrame, Pose};

/// Totals reported after a run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    /// Markers saved during the run
    pub markers: usize,
    /// Frames that reached the guidance loop
    pub frames_processed: u64,
    /// `Arrived` events observed
    pub arrivals: usize,
    /// Commands the session rejected (bad index, no pose, ...)
    pub rejected_commands: usize,
    /// Still navigating when the scenario ended
    pub navigating: bool,
    /// Last guidance frame produced, if any
    pub last_frame: Option<GuidanceFrame>,
}

/// Drives an `ArNavigator` step by step
pub struct ScenarioRunner {
    navigator: ArNavigator,
    pose: Pose,
    summary: RunSummary,
}

impl ScenarioRunner {
    pub fn new(scenario: &Scenario) -> Result<Self> {
        Ok(Self {
            navigator: ArNavigator::new(scenario.guidance.clone())?,
            pose: Pose::default(),
            summary: RunSummary::default(),
        })
    }

    /// Run every step, handing each drained event to `on_event`
    pub fn run(
        mut self,
        scenario: &Scenario,
        mut on_event: impl FnMut(&GuidanceEvent),
    ) -> RunSummary {
        tracing::info!(
            steps = scenario.steps.len(),
            "Running {}",
            scenario.display_name()
        );

        for (i, step) in scenario.steps.iter().enumerate() {
            tracing::debug!(step = i, ?step, "Step");
            self.step(step);

            for event in self.navigator.drain_events() {
                if matches!(event, GuidanceEvent::Arrived { .. }) {
                    self.summary.arrivals += 1;
                }
                on_event(&event);
            }
        }

        self.summary.markers = self.navigator.session().markers().len();
        self.summary.frames_processed = self.navigator.frames_processed();
        self.summary.navigating = self.navigator.session().is_navigating();
        self.summary
    }

    fn step(&mut self, step: &Step) {
        match step {
            Step::SessionStart => {
                if let Err(e) = self.navigator.session_started() {
                    tracing::warn!("Session did not start: {}", e);
                }
            }
            Step::SessionEnd => self.navigator.session_ended(),
            Step::Unsupported { reason } => {
                let err = self.navigator.session_unsupported(reason.as_str());
                tracing::info!("{}", err);
            }
            Step::Pose {
                position,
                orientation,
            } => {
                self.pose = Step::pose(*position, *orientation, &self.pose);
                self.frame(Some(self.pose));
            }
            Step::Walk { to, frames } => self.walk(Vec3::from_array(*to), *frames),
            Step::TrackingLost { frames } => {
                for _ in 0..*frames {
                    self.frame(None);
                }
            }
            Step::AddMarker => self.command(Command::AddMarker),
            Step::Navigate { index } => self.command(Command::start(*index)),
            Step::NavigateLatest => self.command(Command::NavigateToLatest),
            Step::Stop => self.command(Command::StopNavigation),
        }
    }

    fn walk(&mut self, to: Vec3, frames: u32) {
        let from = self.pose.position;
        let frames = frames.max(1);
        for i in 1..=frames {
            self.pose.position = from.lerp(to, i as f32 / frames as f32);
            self.frame(Some(self.pose));
        }
    }

    fn frame(&mut self, pose: Option<Pose>) {
        if let Some(frame) = self.navigator.frame(pose) {
            self.summary.last_frame = Some(frame);
        }
    }

    fn command(&mut self, command: Command) {
        if let Err(e) = self.navigator.command(command) {
            tracing::warn!(?command, "Command rejected: {}", e);
            self.summary.rejected_commands += 1;
        }
    }
}

/// Convenience wrapper: build a runner and replay the whole scenario
pub fn run_scenario(
    scenario: &Scenario,
    on_event: impl FnMut(&GuidanceEvent),
) -> Result<RunSummary> {
    Ok(ScenarioRunner::new(scenario)?.run(scenario, on_event))
}
