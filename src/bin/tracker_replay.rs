//! Replay a recorded session file through a [`Tracker`] and print the
//! resulting state as JSON.
//!
//! This is host tooling built on the core's public surface (see
//! `SPEC_FULL.md` §6) — useful for manual verification of a recording
//! and as a smoke test during development.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use inertial_tracker_core::codec;
use inertial_tracker_core::event::EventKind;
use inertial_tracker_core::Tracker;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Feed a recorded session file through the tracker core and print the
/// final orientation, velocity, displacement and per-sensor statistics.
#[derive(Parser, Debug)]
#[command(name = "tracker-replay", version, about)]
struct Args {
    /// Path to a recorded session file (concatenation of 25-byte
    /// records, magic `0x56289740`).
    session_file: PathBuf,

    /// Configuration override, repeatable: `--config KEY=VALUE`.
    #[arg(long = "config", value_name = "KEY=VALUE")]
    config: Vec<String>,
}

#[derive(Serialize)]
struct Snapshot {
    calibrated: bool,
    orientation: [[f64; 3]; 3],
    velocity: [f64; 3],
    displacement: [f64; 3],
    accelerometer_stats: StatsSnapshot,
    gyroscope_stats: StatsSnapshot,
    magnetic_field_stats: StatsSnapshot,
}

#[derive(Serialize)]
struct StatsSnapshot {
    count: u64,
    rate: f64,
    mean: [f64; 3],
    mean_magnitude: f64,
    variance: f64,
    squares: f64,
}

impl From<inertial_tracker_core::SensorStats> for StatsSnapshot {
    fn from(s: inertial_tracker_core::SensorStats) -> Self {
        Self {
            count: s.count,
            rate: s.rate,
            mean: s.mean,
            mean_magnitude: s.mean_magnitude,
            variance: s.variance,
            squares: s.squares,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut tracker = Tracker::new();
    for entry in &args.config {
        let Some((key, value)) = entry.split_once('=') else {
            anyhow::bail!("invalid --config entry (expected KEY=VALUE): {entry}");
        };
        tracker.config_mut().set(key, value);
    }

    let file = File::open(&args.session_file)?;
    let mut reader = BufReader::new(file);

    tracker.start();
    while let Some(event) = codec::decode_from(&mut reader)? {
        if event.kind == EventKind::Unknown {
            break;
        }
        tracker.receive_event(event);
    }
    tracker.stop();

    let snapshot = Snapshot {
        calibrated: tracker.calibrated(),
        orientation: tracker.orientation().value,
        velocity: tracker.velocity().value,
        displacement: tracker.displacement().value,
        accelerometer_stats: tracker.accelerometer_stats().into(),
        gyroscope_stats: tracker.gyroscope_stats().into(),
        magnetic_field_stats: tracker.magnetic_field_stats().into(),
    };

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
