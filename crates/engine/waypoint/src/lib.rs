//! Waypoint - pose-tracking guidance loop for AR marker navigation
//!
//! The user drops markers at their tracked pose and is later guided back to
//! one of them by a directional indicator. This crate holds that loop,
//! independent of any rendering or XR library, and can be compiled both
//! natively and to WebAssembly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    ArNavigator                           │
//! ├─────────────────────────────────────────────────────────┤
//! │  XrLifecycle                                             │
//! │  └── AwaitingSession → Active → Ended (or Unsupported)  │
//! ├─────────────────────────────────────────────────────────┤
//! │  NavigationSession                                       │
//! │  ├── MarkerList - ordered, append-only snapshots        │
//! │  ├── NavigationState - Idle / Navigating(target)        │
//! │  ├── Command - AddMarker / StartNavigation / Stop       │
//! │  └── GuidanceEvent queue - Arrived, Departed, ...       │
//! ├─────────────────────────────────────────────────────────┤
//! │  Per frame                                               │
//! │  ├── compute_guidance - direction, distance, arrival    │
//! │  └── Indicator - orientation, scale, visibility         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use waypoint::{ArNavigator, Command, GuidanceConfig, Pose};
//! use glam::Vec3;
//!
//! let mut nav = ArNavigator::new(GuidanceConfig::default()).unwrap();
//! nav.session_started().unwrap();
//!
//! // Drop a marker where the viewer stands
//! nav.frame(Some(Pose::new(Vec3::new(1.0, 0.0, 0.0))));
//! nav.command(Command::AddMarker).unwrap();
//!
//! // Walk away and navigate back
//! nav.command(Command::start(0)).unwrap();
//! let frame = nav.frame(Some(Pose::new(Vec3::ZERO))).unwrap();
//! assert_eq!(frame.direction, Vec3::X);
//! assert_eq!(frame.distance, 1.0);
//! ```
//!
//! # Feature Flags
//!
//! - `wasm`: `WasmArNavigator` bindings for browser hosts

mod command;
mod config;
mod error;
mod event;
mod guidance;
mod indicator;
mod lifecycle;
mod marker;
mod pose;
mod session;

#[cfg(feature = "wasm")]
mod wasm;

pub use command::Command;
pub use config::{
    GuidanceConfig, DEFAULT_ARRIVAL_THRESHOLD, DEFAULT_INDICATOR_CAP_LENGTH,
    DEFAULT_INDICATOR_DROP,
};
pub use error::{Error, Result};
pub use event::GuidanceEvent;
pub use guidance::{compute_guidance, direction_between, GuidanceFrame, DEFAULT_DIRECTION};
pub use indicator::{Indicator, IndicatorState, INDICATOR_FORWARD};
pub use lifecycle::{ArNavigator, XrLifecycle};
pub use marker::{Marker, MarkerList};
pub use pose::Pose;
pub use session::{NavigationSession, NavigationState};

#[cfg(feature = "wasm")]
pub use wasm::WasmArNavigator;

// Re-export glam for convenience
pub use glam;
