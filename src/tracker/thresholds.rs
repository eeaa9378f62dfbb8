//! Resolved numeric configuration for one tracker run, snapshotted from
//! [`Configuration`] at `start()` time (spec.md §6's configuration keys
//! table).

use crate::config::Configuration;

/// All of the per-run tunables the four chains and the calibration/
/// drift-fix stages consult. Resolved once per `start()` rather than
/// looked up per event.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// Accelerometer stillness window size.
    pub w_acc: u64,
    /// Gyroscope stillness window size.
    pub w_gyr: u64,
    /// Magnetometer stillness window size.
    pub w_mag: u64,
    /// Accelerometer variance threshold for stillness.
    pub th_acc_var: f64,
    /// Gyroscope summed-squares threshold for stillness.
    pub th_gyr_sq: f64,
    /// Magnetometer variance threshold for stillness.
    pub th_mag_var: f64,
    /// Gravity-magnitude agreement epsilon for drift-fix condition A.
    pub eps_grav: f64,
    /// Magnetic-magnitude agreement epsilon for drift-fix condition B.
    pub eps_mag: f64,
    /// Velocity scale factor applied on every drift-fix.
    pub stillness_speed_quocient: f64,
    /// Whether drift-fix rescales the stored gravity magnitude.
    pub stillness_update_gravity: bool,
    /// Initial accelerometer events to discard.
    pub acc_drop_init: u64,
    /// Initial gyroscope events to discard.
    pub gyr_drop_init: u64,
    /// Initial magnetometer events to discard.
    pub mag_drop_init: u64,
    /// Accelerometer epsilon-zero threshold.
    pub acc_epsilon_zero: f64,
    /// Velocity epsilon-zero threshold.
    pub vel_epsilon_zero: f64,
    /// Gyroscope epsilon-zero threshold.
    pub gyr_epsilon_zero: f64,
}

impl Thresholds {
    /// Resolve every tunable from `config`, falling back to the defaults
    /// from spec.md §6's configuration keys table for anything unset.
    pub fn from_config(config: &Configuration) -> Self {
        Self {
            w_acc: config.as_u64("STILLNESS_ACC_EVENT_NUMBER", 16),
            w_gyr: config.as_u64("STILLNESS_GYR_EVENT_NUMBER", 32),
            w_mag: config.as_u64("STILLNESS_MAG_EVENT_NUMBER", 16),
            th_acc_var: config.as_f64("STILLNESS_ACC_VARIANCE_THRESHOLD", 0.01),
            th_gyr_sq: config.as_f64("STILLNESS_GYR_SQUARES_THRESHOLD", 0.1),
            th_mag_var: config.as_f64("STILLNESS_MAG_VARIANCE_THRESHOLD", 0.15),
            eps_grav: config.as_f64("STILLNESS_GRAVITY_EPSILON", 1.5),
            eps_mag: config.as_f64("STILLNESS_MAG_FIELD_EPSILON", 30.0),
            stillness_speed_quocient: config.as_f64("STILLNESS_SPEED_QUOCIENT", 0.0),
            stillness_update_gravity: config.as_u64("STILLNESS_UPDATE_GRAVITY", 1) != 0,
            acc_drop_init: config.as_u64("ACC_DROP_INIT", 32),
            gyr_drop_init: config.as_u64("GYR_DROP_INIT", 32),
            mag_drop_init: config.as_u64("MAG_DROP_INIT", 32),
            acc_epsilon_zero: config.as_f64("ACC_EPSILON_ZERO", 0.07),
            vel_epsilon_zero: config.as_f64("VEL_EPSILON_ZERO", 0.3),
            gyr_epsilon_zero: config.as_f64("GYR_EPSILON_ZERO", 0.02),
        }
    }
}
