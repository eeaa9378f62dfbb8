//! Typed sensor-event records and the sliding-window statistics type they
//! feed.

use crate::math::{Mat3, Vec3};

/// Ratio of one timestamp tick (nanoseconds) to one second.
pub const TICKS_TO_SECONDS: f64 = 1e-9;

/// Convert a nanosecond timestamp to seconds.
pub fn timestamp_to_seconds(ts: i64) -> f64 {
    ts as f64 * TICKS_TO_SECONDS
}

/// Discriminates the kind of sensor or control event carried by
/// [`AxesEvent`]/[`OrientationEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum EventKind {
    /// Magic mismatch sentinel; never produced by a live sensor.
    Unknown = 0,
    /// Tri-axial accelerometer reading.
    Accelerometer = 1,
    /// Tri-axial gyroscope reading.
    Gyroscope = 2,
    /// Tri-axial magnetometer reading.
    MagneticField = 3,
    /// Orientation (rotation matrix) update.
    Orientation = 4,
    /// Linear velocity update.
    Velocity = 5,
    /// Linear displacement update.
    Displacement = 6,
    /// Pre-integrated linear acceleration reading.
    LinearAcceleration = 7,
    /// Session-start control event.
    Start = 0x10,
    /// Session-stop control event.
    Stop = 0x20,
}

impl EventKind {
    /// `true` for control events (`START`/`STOP`), `false` for sensor and
    /// derived-data kinds. Mirrors the `(k & 0x70) != 0` bitmask test from
    /// spec.md §3.
    pub fn is_system(self) -> bool {
        (self as i8 & 0x70) != 0
    }

    /// Map a raw signed byte to an `EventKind`, falling back to
    /// [`EventKind::Unknown`] for any value with no known meaning.
    pub fn from_i8(raw: i8) -> Self {
        match raw {
            1 => EventKind::Accelerometer,
            2 => EventKind::Gyroscope,
            3 => EventKind::MagneticField,
            4 => EventKind::Orientation,
            5 => EventKind::Velocity,
            6 => EventKind::Displacement,
            7 => EventKind::LinearAcceleration,
            0x10 => EventKind::Start,
            0x20 => EventKind::Stop,
            _ => EventKind::Unknown,
        }
    }
}

/// A tri-axial sensor or control event.
///
/// Used for accelerometer, gyroscope, magnetometer, velocity,
/// displacement and linear-acceleration records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesEvent {
    /// Event kind.
    pub kind: EventKind,
    /// Timestamp in nanoseconds.
    pub timestamp: i64,
    /// Three-component payload.
    pub value: Vec3,
}

impl AxesEvent {
    /// Construct a new axes event.
    pub fn new(kind: EventKind, timestamp: i64, value: Vec3) -> Self {
        Self {
            kind,
            timestamp,
            value,
        }
    }

    /// The zero-value event of the given kind at the given timestamp;
    /// used as the "default value" target for [`crate::filters::EpsilonZero`].
    pub fn zero(kind: EventKind, timestamp: i64) -> Self {
        Self::new(kind, timestamp, [0.0, 0.0, 0.0])
    }

    /// This event's timestamp converted to seconds.
    pub fn timestamp_seconds(&self) -> f64 {
        timestamp_to_seconds(self.timestamp)
    }
}

/// An orientation event: a rotation matrix plus its kind and timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationEvent {
    /// Event kind (ordinarily [`EventKind::Orientation`]).
    pub kind: EventKind,
    /// Timestamp in nanoseconds.
    pub timestamp: i64,
    /// Rotation matrix payload.
    pub value: Mat3,
}

impl OrientationEvent {
    /// Construct a new orientation event.
    pub fn new(kind: EventKind, timestamp: i64, value: Mat3) -> Self {
        Self {
            kind,
            timestamp,
            value,
        }
    }

    /// The identity orientation at timestamp zero — the tracker's
    /// starting orientation per spec.md §3.
    pub fn identity() -> Self {
        Self::new(EventKind::Orientation, 0, crate::math::identity::<3>())
    }

    /// This event's timestamp converted to seconds.
    pub fn timestamp_seconds(&self) -> f64 {
        timestamp_to_seconds(self.timestamp)
    }
}

impl Default for OrientationEvent {
    fn default() -> Self {
        Self::identity()
    }
}

/// Running statistics over a sliding window of the last `W` events for one
/// sensor, maintained by the `Statistics` filter stage (spec.md §4.4–4.5).
#[derive(Debug, Clone, Default)]
pub struct SensorStats {
    /// Number of events currently in the window.
    pub count: u64,
    /// Event rate (events per second), valid once `count > 1`.
    pub rate: f64,
    /// Running mean of the window.
    pub mean: Vec3,
    /// Magnitude of `mean`.
    pub mean_magnitude: f64,
    /// Sample variance of the window (Welford-derived, see spec.md §4.5).
    pub variance: f64,
    /// Running sum of squared magnitudes (`Σ ‖value‖²`).
    pub squares: f64,
}

impl SensorStats {
    /// A freshly reset statistics accumulator.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_system_flags_start_and_stop() {
        assert!(EventKind::Start.is_system());
        assert!(EventKind::Stop.is_system());
        assert!(!EventKind::Accelerometer.is_system());
        assert!(!EventKind::Unknown.is_system());
    }

    #[test]
    fn timestamp_conversion() {
        assert_eq!(timestamp_to_seconds(1_000_000_000), 1.0);
    }

    #[test]
    fn orientation_default_is_identity() {
        let o = OrientationEvent::identity();
        assert_eq!(o.value, crate::math::identity::<3>());
    }

    #[test]
    fn from_i8_unknown_fallback() {
        assert_eq!(EventKind::from_i8(99), EventKind::Unknown);
        assert_eq!(EventKind::from_i8(1), EventKind::Accelerometer);
    }

    #[test]
    fn sensor_stats_resets_to_zero() {
        let s = SensorStats::new();
        assert_eq!(s.count, 0);
        assert_eq!(s.mean, [0.0, 0.0, 0.0]);
        assert_eq!(s.variance, 0.0);
    }
}
