//! `PreMultiplyBy(&M)`: rotates an axes event by a shared orientation
//! matrix before forwarding it.

use std::marker::PhantomData;

use crate::event::{AxesEvent, OrientationEvent};
use crate::math::matvec;
use crate::pipeline::Stage;

/// Replaces `e.value` with `select(state).value * e.value` and emits the
/// result.
pub struct PreMultiplyBy<S, Sel> {
    select: Sel,
    _marker: PhantomData<S>,
}

impl<S, Sel> PreMultiplyBy<S, Sel>
where
    Sel: Fn(&mut S) -> &mut OrientationEvent,
{
    /// Build a stage that rotates by the matrix `select` projects out of
    /// the shared state.
    pub fn new(select: Sel) -> Self {
        Self {
            select,
            _marker: PhantomData,
        }
    }
}

impl<S, Sel> Stage<S, AxesEvent, AxesEvent> for PreMultiplyBy<S, Sel>
where
    Sel: Fn(&mut S) -> &mut OrientationEvent,
{
    fn process(
        &mut self,
        mut input: AxesEvent,
        state: &mut S,
        sink: &mut dyn FnMut(AxesEvent, &mut S),
    ) {
        let matrix = (self.select)(state).value;
        input.value = matvec(&matrix, &input.value);
        sink(input, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::math::identity;

    #[test]
    fn identity_orientation_leaves_value_unchanged() {
        let mut orientation = OrientationEvent::new(EventKind::Orientation, 0, identity::<3>());
        let mut stage = PreMultiplyBy::new(|o: &mut OrientationEvent| o);
        let e = AxesEvent::new(EventKind::Accelerometer, 0, [1.0, 2.0, 3.0]);
        let mut out = None;
        Stage::process(&mut stage, e, &mut orientation, &mut |o, _| out = Some(o));
        assert_eq!(out.unwrap().value, [1.0, 2.0, 3.0]);
    }
}
