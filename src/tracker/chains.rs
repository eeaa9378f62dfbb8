//! Assembly of the four per-sensor chains (spec.md §4.6).

use crate::chain;
use crate::event::{AxesEvent, EventKind, OrientationEvent};
use crate::filters::{
    AddValueTo, Callback, ChangeType, DeltaIntegrate, DropN, EpsilonZero, PostMultiplyThe,
    PreMultiplyBy, RemoveValueOf, Statistics, ToRotationMatrix,
};
use crate::pipeline::Stage;
use crate::tracker::calibrate::Calibrate;
use crate::tracker::callbacks::TrackerCallbacks;
use crate::tracker::fix_drift::FixDrift;
use crate::tracker::state::TrackerState;
use crate::tracker::thresholds::Thresholds;

/// The accelerometer and magnetometer chains' tail type.
pub type AxesChain = Box<dyn Stage<TrackerState, AxesEvent, AxesEvent> + Send>;
/// The gyroscope chain's tail type (ends in an orientation callback).
pub type OrientationChain = Box<dyn Stage<TrackerState, AxesEvent, OrientationEvent> + Send>;

/// Build the accelerometer chain: gravity removal, integration into
/// velocity and displacement.
pub fn build_accel_chain(thresholds: &Thresholds, callbacks: &TrackerCallbacks) -> AxesChain {
    Box::new(chain!(
        Callback::new(callbacks.raw_acc.clone()),
        DropN::new(thresholds.acc_drop_init),
        Statistics::new(thresholds.w_acc, |s: &mut TrackerState| &mut s.stats_acc),
        Calibrate::new(thresholds),
        FixDrift::new(thresholds),
        PreMultiplyBy::new(|s: &mut TrackerState| &mut s.orientation),
        RemoveValueOf::new(|s: &mut TrackerState| &mut s.gravity),
        EpsilonZero::new(thresholds.acc_epsilon_zero),
        Callback::new(callbacks.filtered_acc.clone()),
        ChangeType::new(EventKind::Velocity),
        DeltaIntegrate::new(),
        AddValueTo::new(|s: &mut TrackerState| &mut s.velocity),
        EpsilonZero::new(thresholds.vel_epsilon_zero),
        Callback::new(callbacks.velocity.clone()),
        ChangeType::new(EventKind::Displacement),
        DeltaIntegrate::new(),
        AddValueTo::new(|s: &mut TrackerState| &mut s.displacement),
        Callback::new(callbacks.displacement.clone()),
    ))
}

/// Build the gyroscope chain: integration into an orientation delta,
/// accumulated onto the shared orientation matrix.
pub fn build_gyro_chain(thresholds: &Thresholds, callbacks: &TrackerCallbacks) -> OrientationChain {
    Box::new(chain!(
        Callback::new(callbacks.raw_gyr.clone()),
        DropN::new(thresholds.gyr_drop_init),
        Statistics::new(thresholds.w_gyr, |s: &mut TrackerState| &mut s.stats_gyr),
        Calibrate::new(thresholds),
        FixDrift::new(thresholds),
        EpsilonZero::new(thresholds.gyr_epsilon_zero),
        Callback::new(callbacks.filtered_gyr.clone()),
        ChangeType::new(EventKind::Orientation),
        DeltaIntegrate::new(),
        ToRotationMatrix::new(),
        PostMultiplyThe::new(|s: &mut TrackerState| &mut s.orientation),
        Callback::new(callbacks.orientation.clone()),
    ))
}

/// Build the magnetometer chain: heading-reference removal.
pub fn build_mag_chain(thresholds: &Thresholds, callbacks: &TrackerCallbacks) -> AxesChain {
    Box::new(chain!(
        Callback::new(callbacks.raw_mag.clone()),
        DropN::new(thresholds.mag_drop_init),
        Statistics::new(thresholds.w_mag, |s: &mut TrackerState| &mut s.stats_mag),
        Calibrate::new(thresholds),
        FixDrift::new(thresholds),
        PreMultiplyBy::new(|s: &mut TrackerState| &mut s.orientation),
        RemoveValueOf::new(|s: &mut TrackerState| &mut s.magnetic_reference),
        Callback::new(callbacks.filtered_mag.clone()),
    ))
}

/// Build the linear-acceleration chain: mutually exclusive with the raw
/// accelerometer+gyroscope chains within one session (spec.md §9), it
/// reuses the accel chain's raw/filtered/velocity/displacement callback
/// slots since it produces the same semantic outputs from pre-integrated
/// input.
pub fn build_linear_chain(thresholds: &Thresholds, callbacks: &TrackerCallbacks) -> AxesChain {
    Box::new(chain!(
        ChangeType::new(EventKind::Accelerometer),
        Callback::new(callbacks.raw_acc.clone()),
        DropN::new(thresholds.acc_drop_init),
        Callback::new(callbacks.filtered_acc.clone()),
        ChangeType::new(EventKind::Velocity),
        DeltaIntegrate::new(),
        AddValueTo::new(|s: &mut TrackerState| &mut s.velocity),
        Callback::new(callbacks.velocity.clone()),
        ChangeType::new(EventKind::Displacement),
        DeltaIntegrate::new(),
        AddValueTo::new(|s: &mut TrackerState| &mut s.displacement),
        Callback::new(callbacks.displacement.clone()),
    ))
}
