//! Core of a real-time inertial tracker: a streaming sensor-fusion
//! engine that ingests tri-axial accelerometer, gyroscope and
//! magnetometer readings and continuously estimates orientation, linear
//! velocity and displacement, while performing stillness-based
//! calibration and drift correction.
//!
//! Hosts wire a [`tracker::Tracker`] into whatever transport or UI they
//! need: feed it decoded [`event::AxesEvent`]s via `receive_event`, set
//! callbacks on [`tracker::TrackerCallbacks`], and query orientation,
//! velocity, displacement and per-sensor statistics.

pub mod codec;
pub mod config;
pub mod error;
pub mod event;
pub mod filters;
pub mod math;
pub mod pipeline;
pub mod queue;
pub mod tracker;

pub use error::{TrackerError, TrackerResult};
pub use event::{AxesEvent, EventKind, OrientationEvent, SensorStats};
pub use tracker::{Tracker, TrackerCallbacks};
