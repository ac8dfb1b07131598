//! End-to-end navigation scenarios
//!
//! Drives `NavigationSession` and `ArNavigator` through the user flows the
//! AR host produces: drop markers, pick one, walk, stop.

use glam::Vec3;
use waypoint::{
    ArNavigator, Command, Error, GuidanceConfig, GuidanceEvent, Indicator, NavigationSession,
    NavigationState, Pose,
};

const EPS: f32 = 1e-5;

fn at(x: f32, y: f32, z: f32) -> Pose {
    Pose::new(Vec3::new(x, y, z))
}

/// Indicator that records every call, like a host renderer would receive them
#[derive(Debug, Default)]
struct RecordingIndicator {
    calls: Vec<String>,
    visible: bool,
    last_scale: Option<f32>,
    last_direction: Option<Vec3>,
}

impl Indicator for RecordingIndicator {
    fn set_orientation(&mut self, direction: Vec3) {
        self.calls.push("orientation".into());
        self.last_direction = Some(direction);
    }

    fn set_visible(&mut self, visible: bool) {
        self.calls.push(format!("visible={visible}"));
        self.visible = visible;
    }

    fn set_scale(&mut self, scale: f32) {
        self.calls.push("scale".into());
        self.last_scale = Some(scale);
    }
}

#[test]
fn test_navigate_to_second_marker() {
    let mut session = NavigationSession::new(GuidanceConfig::default()).unwrap();

    session.apply(Command::AddMarker, Some(&at(0.0, 0.0, 0.0))).unwrap();
    session.apply(Command::AddMarker, Some(&at(1.0, 0.0, 0.0))).unwrap();
    session.apply(Command::start(1), None).unwrap();

    let frame = session.update(&at(0.0, 0.0, 0.0)).unwrap();
    assert!((frame.direction - Vec3::X).length() < EPS);
    assert!((frame.distance - 1.0).abs() < EPS);
    assert!(!frame.arrived);
}

#[test]
fn test_marker_at_current_pose_arrives_immediately() {
    let mut session = NavigationSession::new(GuidanceConfig::default()).unwrap();
    let pose = at(1.0, 0.0, 2.0);

    session.apply(Command::AddMarker, Some(&pose)).unwrap();
    session.apply(Command::start(0), None).unwrap();

    let frame = session.update(&pose).unwrap();
    assert_eq!(frame.distance, 0.0);
    assert!(frame.arrived);
    assert!(frame.degenerate);
    assert!(frame.direction.is_finite());
    assert!(session
        .drain_events()
        .iter()
        .any(|e| matches!(e, GuidanceEvent::Arrived { index: 0, .. })));
}

#[test]
fn test_out_of_range_index_leaves_state() {
    let mut session = NavigationSession::new(GuidanceConfig::default()).unwrap();
    session.add_marker(&at(0.0, 0.0, 0.0)).unwrap();
    session.add_marker(&at(0.0, 0.0, 1.0)).unwrap();

    for index in [2, 3, usize::MAX] {
        let result = session.apply(Command::start(index), None);
        assert_eq!(result, Err(Error::InvalidMarkerIndex { index, len: 2 }));
        assert_eq!(*session.state(), NavigationState::Idle);
    }

    session.start_navigation(0).unwrap();
    let before = *session.state();
    assert!(session.apply(Command::start(2), None).is_err());
    assert_eq!(*session.state(), before);
}

#[test]
fn test_stop_always_idles_and_hides() {
    let mut session =
        NavigationSession::with_indicator(GuidanceConfig::default(), RecordingIndicator::default())
            .unwrap();

    // Stop while idle
    session.apply(Command::StopNavigation, None).unwrap();
    assert_eq!(*session.state(), NavigationState::Idle);
    assert!(!session.indicator().visible);

    // Stop while navigating
    session.add_marker(&at(3.0, 0.0, 0.0)).unwrap();
    session.start_navigation(0).unwrap();
    session.update(&at(0.0, 0.0, 0.0));
    assert!(session.indicator().visible);

    session.apply(Command::StopNavigation, None).unwrap();
    assert_eq!(*session.state(), NavigationState::Idle);
    assert!(!session.indicator().visible);
    assert_eq!(
        session.indicator().calls.last().map(String::as_str),
        Some("visible=false")
    );
}

#[test]
fn test_indicator_scale_is_capped() {
    let mut session =
        NavigationSession::with_indicator(GuidanceConfig::default(), RecordingIndicator::default())
            .unwrap();
    session.add_marker(&at(0.0, 0.0, -10.0)).unwrap();
    session.start_navigation(0).unwrap();

    session.update(&at(0.0, 0.0, 0.0));
    assert_eq!(session.indicator().last_scale, Some(0.5));

    session.update(&at(0.0, 0.0, -9.8));
    let scale = session.indicator().last_scale.unwrap();
    assert!((scale - 0.2).abs() < 1e-4);
    let direction = session.indicator().last_direction.unwrap();
    assert!((direction - Vec3::NEG_Z).length() < EPS);
}

#[test]
fn test_walk_toward_marker() {
    let mut nav = ArNavigator::new(GuidanceConfig::default()).unwrap();
    nav.session_started().unwrap();

    let marker = Vec3::new(2.0, 0.0, -4.0);
    nav.frame(Some(Pose::new(marker)));
    nav.command(Command::AddMarker).unwrap();
    nav.command(Command::start(0)).unwrap();

    let start = Vec3::new(-2.0, 0.0, 4.0);
    let mut last_distance = f32::INFINITY;
    for step in 0..=50 {
        let position = start.lerp(marker, step as f32 / 50.0);
        let Some(frame) = nav.frame(Some(Pose::new(position))) else {
            panic!("navigation ended early at step {step}");
        };

        assert!(frame.distance <= last_distance + EPS);
        if !frame.degenerate {
            assert!((frame.direction.length() - 1.0).abs() < EPS);
            assert!(frame.direction.dot(marker - position) > 0.0);
        }
        last_distance = frame.distance;
    }

    let arrivals = nav
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GuidanceEvent::Arrived { .. }))
        .count();
    assert_eq!(arrivals, 1);
}

#[test]
fn test_placement_distance_puts_marker_ahead() {
    let config = GuidanceConfig::default().with_placement_distance(0.5);
    let mut session = NavigationSession::new(config).unwrap();

    let (_, marker) = session.add_marker(&at(0.0, 1.6, 0.0)).unwrap();
    assert!((marker.position - Vec3::new(0.0, 1.6, -0.5)).length() < EPS);
}
