//! `FunctionFilter(p)`: forwards an event only if a predicate accepts it.

use std::marker::PhantomData;

use crate::pipeline::Stage;

/// Evaluates an optional predicate against each event; forwards it when
/// the predicate is unset or returns `true`, drops it otherwise.
pub struct FunctionFilter<T, P> {
    predicate: Option<P>,
    _marker: PhantomData<T>,
}

impl<T, P> FunctionFilter<T, P>
where
    P: FnMut(&T) -> bool,
{
    /// Build a stage that only forwards events `predicate` accepts.
    pub fn new(predicate: P) -> Self {
        Self {
            predicate: Some(predicate),
            _marker: PhantomData,
        }
    }
}

impl<T, P> Default for FunctionFilter<T, P> {
    /// No predicate set: every event is forwarded.
    fn default() -> Self {
        Self {
            predicate: None,
            _marker: PhantomData,
        }
    }
}

impl<S, T, P> Stage<S, T, T> for FunctionFilter<T, P>
where
    P: FnMut(&T) -> bool,
{
    fn process(&mut self, input: T, state: &mut S, sink: &mut dyn FnMut(T, &mut S)) {
        let pass = match &mut self.predicate {
            Some(p) => p(&input),
            None => true,
        };
        if pass {
            sink(input, state);
        }
    }
}
