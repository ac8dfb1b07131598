//! Walkthrough - headless replay of scripted AR walks
//!
//! Loads a TOML scenario (guidance config plus a list of host events:
//! session start/end, poses, walks, UI commands) and feeds it through
//! [`waypoint::ArNavigator`] exactly as a browser host would, frame by
//! frame. Useful for checking guidance behavior without a device.
//!
//! ```toml
//! name = "return to start"
//!
//! [guidance]
//! arrival_threshold = 0.1
//!
//! [[steps]]
//! action = "session_start"
//!
//! [[steps]]
//! action = "pose"
//! position = [0.0, 1.6, 0.0]
//!
//! [[steps]]
//! action = "add_marker"
//! ```

pub mod runner;
pub mod scenario;

pub use runner::{run_scenario, RunSummary, ScenarioRunner};
pub use scenario::{Scenario, Step};
