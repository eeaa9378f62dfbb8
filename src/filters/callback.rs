//! `Callback(f)`: invokes a host-supplied function, then re-emits the
//! event unchanged.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use crate::pipeline::Stage;

/// A shared, swappable callback slot. The `Tracker`'s public setters
/// (§4.6/§6) write into the slot directly; the `Callback` stage holds a
/// clone of the `Arc` so the host can change the callback at any time,
/// including before a chain is rebuilt on the next `start()`.
pub type CallbackSlot<T> = Arc<Mutex<Option<Box<dyn FnMut(&T) + Send>>>>;

/// `Callback(f)` stage: calls `f(e)` if a callback is currently set in
/// the slot, then forwards `e` unchanged regardless.
pub struct Callback<T> {
    slot: CallbackSlot<T>,
    _marker: PhantomData<T>,
}

impl<T> Callback<T> {
    /// Build a stage backed by the given callback slot.
    pub fn new(slot: CallbackSlot<T>) -> Self {
        Self {
            slot,
            _marker: PhantomData,
        }
    }

    /// A fresh, initially-empty callback slot.
    pub fn new_slot() -> CallbackSlot<T> {
        Arc::new(Mutex::new(None))
    }
}

impl<S, T: Copy> Stage<S, T, T> for Callback<T> {
    fn process(&mut self, input: T, state: &mut S, sink: &mut dyn FnMut(T, &mut S)) {
        if let Ok(mut guard) = self.slot.lock() {
            if let Some(f) = guard.as_mut() {
                f(&input);
            }
        }
        sink(input, state);
    }
}
