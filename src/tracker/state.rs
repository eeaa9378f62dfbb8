//! Shared tracker state mutated by the worker and read by external
//! getters (spec.md §3).

use crate::event::{AxesEvent, EventKind, OrientationEvent, SensorStats};

/// The tracker's shared state: orientation, velocity, displacement,
/// calibration references and per-sensor statistics.
///
/// Every chain stage that touches shared data receives `&mut
/// TrackerState` alongside its event rather than holding a back-reference
/// into it (see `SPEC_FULL.md` §9); the worker holds one lock for the
/// full traversal of an event through its chain, giving external getters
/// the "reflects a prefix of enqueued events" guarantee from spec.md §5.
#[derive(Debug, Clone)]
pub struct TrackerState {
    /// Current orientation estimate.
    pub orientation: OrientationEvent,
    /// Current linear velocity estimate.
    pub velocity: AxesEvent,
    /// Current linear displacement estimate.
    pub displacement: AxesEvent,
    /// Gravity reference snapshotted at calibration.
    pub gravity: AxesEvent,
    /// Magnetic heading reference snapshotted at calibration.
    pub magnetic_reference: AxesEvent,
    /// Accelerometer sliding-window statistics.
    pub stats_acc: SensorStats,
    /// Gyroscope sliding-window statistics.
    pub stats_gyr: SensorStats,
    /// Magnetometer sliding-window statistics.
    pub stats_mag: SensorStats,
    /// `true` once all three stillness conditions have first co-occurred.
    pub calibrated: bool,
}

impl TrackerState {
    /// The state a freshly `start()`-ed tracker begins with: identity
    /// orientation, zeroed velocity/displacement/references, empty
    /// statistics, uncalibrated.
    pub fn new() -> Self {
        Self {
            orientation: OrientationEvent::identity(),
            velocity: AxesEvent::zero(EventKind::Velocity, 0),
            displacement: AxesEvent::zero(EventKind::Displacement, 0),
            gravity: AxesEvent::zero(EventKind::Accelerometer, 0),
            magnetic_reference: AxesEvent::zero(EventKind::MagneticField, 0),
            stats_acc: SensorStats::new(),
            stats_gyr: SensorStats::new(),
            stats_mag: SensorStats::new(),
            calibrated: false,
        }
    }
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::identity;

    #[test]
    fn fresh_state_is_identity_and_uncalibrated() {
        let state = TrackerState::new();
        assert_eq!(state.orientation.value, identity::<3>());
        assert_eq!(state.velocity.value, [0.0, 0.0, 0.0]);
        assert!(!state.calibrated);
    }
}
