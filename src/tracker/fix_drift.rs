//! `FixDrift`: stillness-triggered drift correction against the gravity
//! and magnetic references (spec.md §4.8).

use tracing::debug;

use crate::event::AxesEvent;
use crate::math::{matmul, matvec, norm, rotation_matrix_a_to_b, vecmat, vscale};
use crate::pipeline::Stage;
use crate::tracker::state::TrackerState;
use crate::tracker::thresholds::Thresholds;

/// Always forwards its input. When the device is gyro+accel still
/// (condition A), corrects orientation against the stored gravity
/// reference; when it is additionally magnetometer-still (condition B),
/// further corrects heading against the stored magnetic reference.
pub struct FixDrift {
    th_gyr_sq: f64,
    th_acc_var: f64,
    eps_grav: f64,
    th_mag_var: f64,
    eps_mag: f64,
    update_gravity: bool,
    speed_quocient: f64,
}

impl FixDrift {
    /// Build a stage from the run's resolved thresholds.
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            th_gyr_sq: thresholds.th_gyr_sq,
            th_acc_var: thresholds.th_acc_var,
            eps_grav: thresholds.eps_grav,
            th_mag_var: thresholds.th_mag_var,
            eps_mag: thresholds.eps_mag,
            update_gravity: thresholds.stillness_update_gravity,
            speed_quocient: thresholds.stillness_speed_quocient,
        }
    }

    /// Project `v` through the gravity→Z rotation `r`: rotate, zero the
    /// z-component, then rotate back with `v·R` — the exact operation
    /// order spec.md §9's open question calls out (`R·v`, zero z, then
    /// `(·)·Rᵀ`, equivalently `v·R`).
    fn project(r: &crate::math::Mat3, v: crate::math::Vec3) -> crate::math::Vec3 {
        let mut rotated = matvec(r, &v);
        rotated[2] = 0.0;
        vecmat(&rotated, r)
    }
}

impl Stage<TrackerState, AxesEvent, AxesEvent> for FixDrift {
    fn process(
        &mut self,
        input: AxesEvent,
        state: &mut TrackerState,
        sink: &mut dyn FnMut(AxesEvent, &mut TrackerState),
    ) {
        let condition_a = state.stats_gyr.squares < self.th_gyr_sq
            && state.stats_acc.variance < self.th_acc_var
            && (norm(&state.gravity.value) - norm(&state.stats_acc.mean)).abs() < self.eps_grav;

        if condition_a {
            let drift_fix = rotation_matrix_a_to_b(
                matvec(&state.orientation.value, &state.stats_acc.mean),
                state.gravity.value,
            );
            state.orientation.value = matmul(&drift_fix, &state.orientation.value);

            if self.update_gravity {
                let gravity_norm = norm(&state.gravity.value);
                if gravity_norm > 0.0 {
                    state.gravity.value =
                        vscale(state.gravity.value, state.stats_acc.mean_magnitude / gravity_norm);
                }
            }
            state.velocity.value = vscale(state.velocity.value, self.speed_quocient);
            debug!("drift-fix condition A applied");

            let condition_b = state.stats_mag.variance < self.th_mag_var
                && (norm(&state.stats_mag.mean) - norm(&state.magnetic_reference.value)).abs()
                    < self.eps_mag;

            if condition_b {
                let r = rotation_matrix_a_to_b(state.gravity.value, [0.0, 0.0, 1.0]);
                let p_now = Self::project(&r, matvec(&state.orientation.value, &state.stats_mag.mean));
                let p_ref = Self::project(&r, state.magnetic_reference.value);
                let heading_fix = rotation_matrix_a_to_b(p_now, p_ref);
                state.orientation.value = matmul(&heading_fix, &state.orientation.value);
                debug!("drift-fix condition B (heading) applied");
            }
        }

        sink(input, state);
    }
}
