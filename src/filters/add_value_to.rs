//! `AddValueTo(&shared)`: accumulates into a shared axes event (used for
//! velocity and displacement).

use std::marker::PhantomData;

use crate::event::AxesEvent;
use crate::math::vadd;
use crate::pipeline::Stage;

/// Adds `e.value` into `*select(state)`, copies `e`'s kind and timestamp
/// onto it, and emits a copy of the updated shared event.
pub struct AddValueTo<S, Sel> {
    select: Sel,
    _marker: PhantomData<S>,
}

impl<S, Sel> AddValueTo<S, Sel>
where
    Sel: Fn(&mut S) -> &mut AxesEvent,
{
    /// Build a stage that accumulates into the field `select` projects
    /// out of the shared state.
    pub fn new(select: Sel) -> Self {
        Self {
            select,
            _marker: PhantomData,
        }
    }
}

impl<S, Sel> Stage<S, AxesEvent, AxesEvent> for AddValueTo<S, Sel>
where
    Sel: Fn(&mut S) -> &mut AxesEvent,
{
    fn process(
        &mut self,
        input: AxesEvent,
        state: &mut S,
        sink: &mut dyn FnMut(AxesEvent, &mut S),
    ) {
        let updated = {
            let shared = (self.select)(state);
            shared.value = vadd(shared.value, input.value);
            shared.kind = input.kind;
            shared.timestamp = input.timestamp;
            *shared
        };
        sink(updated, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    #[test]
    fn accumulates_and_stamps_shared_event() {
        let mut shared = AxesEvent::zero(EventKind::Velocity, 0);
        let mut stage = AddValueTo::new(|s: &mut AxesEvent| s);
        let mut out = None;
        let e = AxesEvent::new(EventKind::Accelerometer, 5, [1.0, 1.0, 1.0]);
        Stage::process(&mut stage, e, &mut shared, &mut |o, _| out = Some(o));
        let out = out.unwrap();
        assert_eq!(out.value, [1.0, 1.0, 1.0]);
        assert_eq!(out.kind, EventKind::Accelerometer);
        assert_eq!(out.timestamp, 5);
        assert_eq!(shared.value, [1.0, 1.0, 1.0]);
    }
}
