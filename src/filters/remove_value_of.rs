//! `RemoveValueOf(&shared)`: subtracts a shared axes event's value from
//! the incoming event (used to strip gravity/heading references).

use std::marker::PhantomData;

use crate::event::AxesEvent;
use crate::math::vsub;
use crate::pipeline::Stage;

/// Subtracts `select(state).value` from `e.value`, leaving kind and
/// timestamp untouched, and emits the result.
pub struct RemoveValueOf<S, Sel> {
    select: Sel,
    _marker: PhantomData<S>,
}

impl<S, Sel> RemoveValueOf<S, Sel>
where
    Sel: Fn(&mut S) -> &mut AxesEvent,
{
    /// Build a stage that subtracts the field `select` projects out of
    /// the shared state.
    pub fn new(select: Sel) -> Self {
        Self {
            select,
            _marker: PhantomData,
        }
    }
}

impl<S, Sel> Stage<S, AxesEvent, AxesEvent> for RemoveValueOf<S, Sel>
where
    Sel: Fn(&mut S) -> &mut AxesEvent,
{
    fn process(
        &mut self,
        mut input: AxesEvent,
        state: &mut S,
        sink: &mut dyn FnMut(AxesEvent, &mut S),
    ) {
        let shared_value = (self.select)(state).value;
        input.value = vsub(input.value, shared_value);
        sink(input, state);
    }
}
