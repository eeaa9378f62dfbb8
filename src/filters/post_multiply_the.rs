//! `PostMultiplyThe(&M)`: accumulates an orientation delta into a shared
//! rotation matrix.

use std::marker::PhantomData;

use crate::event::OrientationEvent;
use crate::math::matmul;
use crate::pipeline::Stage;

/// `select(state).value ← select(state).value * e.value`; copies `e`'s
/// kind and timestamp onto the shared event and emits a copy of it.
pub struct PostMultiplyThe<S, Sel> {
    select: Sel,
    _marker: PhantomData<S>,
}

impl<S, Sel> PostMultiplyThe<S, Sel>
where
    Sel: Fn(&mut S) -> &mut OrientationEvent,
{
    /// Build a stage that post-multiplies the matrix `select` projects
    /// out of the shared state.
    pub fn new(select: Sel) -> Self {
        Self {
            select,
            _marker: PhantomData,
        }
    }
}

impl<S, Sel> Stage<S, OrientationEvent, OrientationEvent> for PostMultiplyThe<S, Sel>
where
    Sel: Fn(&mut S) -> &mut OrientationEvent,
{
    fn process(
        &mut self,
        input: OrientationEvent,
        state: &mut S,
        sink: &mut dyn FnMut(OrientationEvent, &mut S),
    ) {
        let updated = {
            let shared = (self.select)(state);
            shared.value = matmul(&shared.value, &input.value);
            shared.kind = input.kind;
            shared.timestamp = input.timestamp;
            *shared
        };
        sink(updated, state);
    }
}
