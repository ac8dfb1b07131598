//! Walkthrough CLI
//!
//! Replays a scenario file through the guidance loop and prints a summary.
//! Set `RUST_LOG` (or pass `-v`) for per-frame detail.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use walkthrough::{run_scenario, Scenario};

/// Replay scripted AR walks through the waypoint guidance loop
#[derive(Parser)]
#[command(name = "walkthrough")]
#[command(about = "Headless replay of AR marker placement and navigation scenarios")]
struct Args {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Print each guidance event as a JSON line
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let scenario = Scenario::load(&args.scenario)?;

    let json = args.json;
    let summary = run_scenario(&scenario, |event| {
        if json {
            match serde_json::to_string(event) {
                Ok(line) => println!("{}", line),
                Err(e) => tracing::error!("Failed to encode event: {}", e),
            }
        } else {
            tracing::info!(event = event.name(), "{:?}", event);
        }
    })?;

    println!("=== {} ===", scenario.display_name());
    println!("Markers:           {}", summary.markers);
    println!("Frames processed:  {}", summary.frames_processed);
    println!("Arrivals:          {}", summary.arrivals);
    println!("Rejected commands: {}", summary.rejected_commands);
    println!("Still navigating:  {}", summary.navigating);
    if let Some(frame) = summary.last_frame {
        println!(
            "Last frame:        distance {:.3} m, direction {}",
            frame.distance, frame.direction
        );
    }

    Ok(())
}
