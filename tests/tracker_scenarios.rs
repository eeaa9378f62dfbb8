//! Black-box scenario tests against the public `Tracker` API (spec.md §8).

use std::f64::consts::FRAC_PI_2;

use inertial_tracker_core::event::{AxesEvent, EventKind};
use inertial_tracker_core::math::{identity, norm, rotation_matrix_axis_angle};
use inertial_tracker_core::Tracker;

const NS_PER_10MS: i64 = 10_000_000;

fn calibrate_still(tracker: &mut Tracker) {
    // Defaults: ACC_DROP_INIT=32, W_acc=16 -> 48 events needed to
    // calibrate accel; GYR_DROP_INIT=32, W_gyr=32 -> 64; MAG_DROP_INIT=32,
    // W_mag=16 -> 48. Feed enough of each, interleaved by index.
    let total = 64;
    for i in 0..total {
        let ts = i as i64 * NS_PER_10MS;
        tracker.receive_event(AxesEvent::new(EventKind::Accelerometer, ts, [0.0, 0.0, 9.81]));
        tracker.receive_event(AxesEvent::new(EventKind::Gyroscope, ts, [0.0, 0.0, 0.0]));
        tracker.receive_event(AxesEvent::new(EventKind::MagneticField, ts, [20.0, 0.0, 40.0]));
    }
}

#[test]
fn calibration_transitions_exactly_once_with_expected_gravity() {
    let mut tracker = Tracker::new();
    tracker.start();
    calibrate_still(&mut tracker);
    tracker.stop();

    assert!(tracker.calibrated());
    let gravity_like = tracker.accelerometer_stats().mean;
    assert!((norm(&gravity_like) - 9.81).abs() < 1e-6);
}

#[test]
fn still_device_scenario_keeps_orientation_identity_and_zero_motion() {
    let mut tracker = Tracker::new();
    tracker.start();
    calibrate_still(&mut tracker);
    tracker.stop();

    assert!(tracker.calibrated());
    let orientation = tracker.orientation();
    let identity = identity::<3>();
    for r in 0..3 {
        for c in 0..3 {
            assert!((orientation.value[r][c] - identity[r][c]).abs() < 1e-6);
        }
    }
    assert!(norm(&tracker.velocity().value) < 1e-6);
    assert!(norm(&tracker.displacement().value) < 1e-6);
}

#[test]
fn pure_linear_displacement_scenario() {
    let mut tracker = Tracker::new();
    tracker.start();
    calibrate_still(&mut tracker);

    let base_ts = 64 * NS_PER_10MS;
    // 100 samples averaging 1 m/s^2 along X (gravity already removed by
    // the chain's RemoveValueOf stage, so feed the raw reading as
    // gravity plus the desired linear component). The component
    // alternates around the mean rather than staying bit-identical: a
    // sustained constant value eventually looks "still" again to the
    // variance-only stillness heuristic once the sliding window is
    // fully replaced, which would re-trigger drift-fix and zero the
    // integrated velocity (spec.md §9's acknowledged limitation).
    for i in 0..100i64 {
        let ts = base_ts + i * NS_PER_10MS;
        let x = if i % 2 == 0 { 0.5 } else { 1.5 };
        tracker.receive_event(AxesEvent::new(EventKind::Accelerometer, ts, [x, 0.0, 9.81]));
    }
    tracker.stop();

    let velocity_mag = norm(&tracker.velocity().value);
    let displacement_mag = norm(&tracker.displacement().value);
    assert!(
        (velocity_mag - 1.0).abs() < 0.2,
        "velocity magnitude {velocity_mag} not near 1 m/s"
    );
    assert!(
        (displacement_mag - 0.5).abs() < 0.2,
        "displacement magnitude {displacement_mag} not near 0.5 m"
    );
}

#[test]
fn ninety_degree_yaw_scenario() {
    let mut tracker = Tracker::new();
    tracker.start();
    calibrate_still(&mut tracker);

    let base_ts = 64 * NS_PER_10MS;
    for i in 0..100i64 {
        let ts = base_ts + i * NS_PER_10MS;
        tracker.receive_event(AxesEvent::new(EventKind::Gyroscope, ts, [0.0, 0.0, FRAC_PI_2]));
        tracker.receive_event(AxesEvent::new(EventKind::Accelerometer, ts, [0.0, 0.0, 9.81]));
        tracker.receive_event(AxesEvent::new(
            EventKind::MagneticField,
            ts,
            [20.0, 0.0, 40.0],
        ));
    }
    tracker.stop();

    let expected = rotation_matrix_axis_angle([0.0, 0.0, 1.0], FRAC_PI_2);
    let orientation = tracker.orientation().value;
    for r in 0..3 {
        for c in 0..3 {
            assert!(
                (orientation[r][c] - expected[r][c]).abs() < 0.2,
                "orientation[{r}][{c}] = {}, expected {}",
                orientation[r][c],
                expected[r][c]
            );
        }
    }
}
