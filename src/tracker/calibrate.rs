//! `Calibrate`: couples the three per-sensor statistics into the
//! one-time stillness-based calibration transition (spec.md §4.7).

use tracing::info;

use crate::event::AxesEvent;
use crate::pipeline::Stage;
use crate::tracker::state::TrackerState;
use crate::tracker::thresholds::Thresholds;

/// Once `state.calibrated` is `true`, forwards every event unchanged.
/// Until then, on every event it checks whether all three sensors report
/// stillness simultaneously; when they do, it snapshots the gravity and
/// magnetic references, flips `calibrated`, and forwards this event —
/// otherwise it drops the event.
pub struct Calibrate {
    w_acc: u64,
    th_acc_var: f64,
    w_gyr: u64,
    th_gyr_sq: f64,
    w_mag: u64,
    th_mag_var: f64,
}

impl Calibrate {
    /// Build a stage from the run's resolved thresholds.
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            w_acc: thresholds.w_acc,
            th_acc_var: thresholds.th_acc_var,
            w_gyr: thresholds.w_gyr,
            th_gyr_sq: thresholds.th_gyr_sq,
            w_mag: thresholds.w_mag,
            th_mag_var: thresholds.th_mag_var,
        }
    }
}

impl Stage<TrackerState, AxesEvent, AxesEvent> for Calibrate {
    fn process(
        &mut self,
        input: AxesEvent,
        state: &mut TrackerState,
        sink: &mut dyn FnMut(AxesEvent, &mut TrackerState),
    ) {
        if !state.calibrated {
            let ready = state.stats_acc.count == self.w_acc
                && state.stats_acc.variance < self.th_acc_var
                && state.stats_gyr.count == self.w_gyr
                && state.stats_gyr.squares < self.th_gyr_sq
                && state.stats_mag.count == self.w_mag
                && state.stats_mag.variance < self.th_mag_var;
            if !ready {
                return;
            }
            state.gravity.value = state.stats_acc.mean;
            state.magnetic_reference.value = state.stats_mag.mean;
            state.calibrated = true;
            info!(
                gravity = ?state.gravity.value,
                magnetic_reference = ?state.magnetic_reference.value,
                "tracker calibrated"
            );
        }
        sink(input, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::event::EventKind;

    fn make_calibrate() -> Calibrate {
        Calibrate::new(&Thresholds::from_config(&Configuration::new()))
    }

    #[test]
    fn drops_events_until_all_three_sensors_are_still() {
        let mut stage = make_calibrate();
        let mut state = TrackerState::new();
        state.stats_acc.count = 16;
        state.stats_acc.variance = 0.001;
        // gyro and mag not yet ready
        let mut emitted = Vec::new();
        let e = AxesEvent::new(EventKind::Accelerometer, 0, [0.0, 0.0, 9.81]);
        Stage::process(&mut stage, e, &mut state, &mut |o, _| emitted.push(o));
        assert!(emitted.is_empty());
        assert!(!state.calibrated);
    }

    #[test]
    fn calibrates_once_all_conditions_hold_and_forwards_transition_event() {
        let mut stage = make_calibrate();
        let mut state = TrackerState::new();
        state.stats_acc.count = 16;
        state.stats_acc.variance = 0.001;
        state.stats_acc.mean = [0.0, 0.0, 9.81];
        state.stats_gyr.count = 32;
        state.stats_gyr.squares = 0.01;
        state.stats_mag.count = 16;
        state.stats_mag.variance = 0.01;
        state.stats_mag.mean = [20.0, 0.0, 40.0];

        let mut emitted = Vec::new();
        let e = AxesEvent::new(EventKind::Accelerometer, 0, [0.0, 0.0, 9.81]);
        Stage::process(&mut stage, e, &mut state, &mut |o, _| emitted.push(o));

        assert!(state.calibrated);
        assert_eq!(state.gravity.value, [0.0, 0.0, 9.81]);
        assert_eq!(state.magnetic_reference.value, [20.0, 0.0, 40.0]);
        assert_eq!(emitted.len(), 1);
    }

    #[test]
    fn already_calibrated_forwards_everything() {
        let mut stage = make_calibrate();
        let mut state = TrackerState::new();
        state.calibrated = true;
        let mut emitted = Vec::new();
        let e = AxesEvent::new(EventKind::Accelerometer, 0, [1.0, 2.0, 3.0]);
        Stage::process(&mut stage, e, &mut state, &mut |o, _| emitted.push(o));
        assert_eq!(emitted.len(), 1);
    }
}
