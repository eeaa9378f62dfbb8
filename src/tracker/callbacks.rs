//! The tracker's ten host-facing callback slots (spec.md §4.6/§6).

use crate::event::{AxesEvent, OrientationEvent};
use crate::filters::CallbackSlot;

/// One swappable callback slot per observable point in the four chains.
/// Each is an `Arc<Mutex<..>>` shared with the `Callback` stage instances
/// built into the chains, so a host can change a callback at any time,
/// including while the worker is running.
#[derive(Clone)]
pub struct TrackerCallbacks {
    /// Raw accelerometer samples, before any filtering.
    pub raw_acc: CallbackSlot<AxesEvent>,
    /// Accelerometer samples after gravity removal and epsilon-zeroing.
    pub filtered_acc: CallbackSlot<AxesEvent>,
    /// Velocity updates.
    pub velocity: CallbackSlot<AxesEvent>,
    /// Displacement updates.
    pub displacement: CallbackSlot<AxesEvent>,
    /// Raw gyroscope samples, before any filtering.
    pub raw_gyr: CallbackSlot<AxesEvent>,
    /// Gyroscope samples after drift-fix and epsilon-zeroing.
    pub filtered_gyr: CallbackSlot<AxesEvent>,
    /// Orientation updates.
    pub orientation: CallbackSlot<OrientationEvent>,
    /// Raw magnetometer samples, before any filtering.
    pub raw_mag: CallbackSlot<AxesEvent>,
    /// Magnetometer samples after heading-reference removal.
    pub filtered_mag: CallbackSlot<AxesEvent>,
}

impl TrackerCallbacks {
    /// Nine freshly-empty callback slots.
    pub fn new() -> Self {
        Self {
            raw_acc: crate::filters::Callback::new_slot(),
            filtered_acc: crate::filters::Callback::new_slot(),
            velocity: crate::filters::Callback::new_slot(),
            displacement: crate::filters::Callback::new_slot(),
            raw_gyr: crate::filters::Callback::new_slot(),
            filtered_gyr: crate::filters::Callback::new_slot(),
            orientation: crate::filters::Callback::new_slot(),
            raw_mag: crate::filters::Callback::new_slot(),
            filtered_mag: crate::filters::Callback::new_slot(),
        }
    }
}

impl Default for TrackerCallbacks {
    fn default() -> Self {
        Self::new()
    }
}

fn set_slot<T>(slot: &CallbackSlot<T>, f: impl FnMut(&T) + Send + 'static) {
    *slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(Box::new(f));
}

impl TrackerCallbacks {
    /// Set the raw accelerometer callback.
    pub fn set_raw_acc(&self, f: impl FnMut(&AxesEvent) + Send + 'static) {
        set_slot(&self.raw_acc, f);
    }

    /// Set the filtered accelerometer callback.
    pub fn set_filtered_acc(&self, f: impl FnMut(&AxesEvent) + Send + 'static) {
        set_slot(&self.filtered_acc, f);
    }

    /// Set the velocity callback.
    pub fn set_velocity(&self, f: impl FnMut(&AxesEvent) + Send + 'static) {
        set_slot(&self.velocity, f);
    }

    /// Set the displacement callback.
    pub fn set_displacement(&self, f: impl FnMut(&AxesEvent) + Send + 'static) {
        set_slot(&self.displacement, f);
    }

    /// Set the raw gyroscope callback.
    pub fn set_raw_gyr(&self, f: impl FnMut(&AxesEvent) + Send + 'static) {
        set_slot(&self.raw_gyr, f);
    }

    /// Set the filtered gyroscope callback.
    pub fn set_filtered_gyr(&self, f: impl FnMut(&AxesEvent) + Send + 'static) {
        set_slot(&self.filtered_gyr, f);
    }

    /// Set the orientation callback.
    pub fn set_orientation(&self, f: impl FnMut(&OrientationEvent) + Send + 'static) {
        set_slot(&self.orientation, f);
    }

    /// Set the raw magnetometer callback.
    pub fn set_raw_mag(&self, f: impl FnMut(&AxesEvent) + Send + 'static) {
        set_slot(&self.raw_mag, f);
    }

    /// Set the filtered magnetometer callback.
    pub fn set_filtered_mag(&self, f: impl FnMut(&AxesEvent) + Send + 'static) {
        set_slot(&self.filtered_mag, f);
    }
}
