//! Generic pipeline-element contract and chain composition.
//!
//! A stage's `process` is the Rust equivalent of the original's
//! `receive`/`send` pair: rather than holding a boxed `next` destination
//! at runtime, a stage is handed a `sink` closure to call zero or more
//! times with its output, and the type of that output is checked by the
//! compiler against the next stage's input type when two stages are
//! composed with [`Chain2`]. A stage that calls `sink` zero times (e.g.
//! `Drop` during its drop window, `FunctionFilter` rejecting an event)
//! implements the "no-op send" half of the original contract; one that
//! never receives further input past it (the tail `Callback`) simply has
//! its `sink` calls go nowhere, since nothing is chained after it.
//!
//! Every stage additionally receives `&mut S`, the tracker's shared
//! state, alongside its input event — see spec.md §9 and
//! `SPEC_FULL.md` §9 for why this replaces back-references/raw pointers
//! into tracker state.

/// One pipeline element: consumes an `In` event (plus shared state `S`)
/// and produces zero or more `Out` events via `sink`.
pub trait Stage<S, In, Out> {
    /// Process one input event, emitting zero or more outputs to `sink`.
    fn process(&mut self, input: In, state: &mut S, sink: &mut dyn FnMut(Out, &mut S));
}

/// Composition of two stages: `A`'s output feeds directly into `B`'s
/// input. Itself implements [`Stage`], so chains of arbitrary length
/// nest via repeated `Chain2`s (see the [`chain!`] macro).
pub struct Chain2<A, B, Mid> {
    first: A,
    second: B,
    _mid: core::marker::PhantomData<fn() -> Mid>,
}

impl<A, B, Mid> Chain2<A, B, Mid> {
    /// Wire `first`'s output directly into `second`'s input.
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            _mid: core::marker::PhantomData,
        }
    }
}

impl<S, In, Mid, Out, A, B> Stage<S, In, Out> for Chain2<A, B, Mid>
where
    A: Stage<S, In, Mid>,
    B: Stage<S, Mid, Out>,
{
    fn process(&mut self, input: In, state: &mut S, sink: &mut dyn FnMut(Out, &mut S)) {
        let second = &mut self.second;
        self.first.process(input, state, &mut |mid, state| {
            second.process(mid, state, sink);
        });
    }
}

/// Build a right-nested [`Chain2`] out of an arbitrary number of stages.
///
/// `chain!(a, b, c, d)` expands to `Chain2::new(a, Chain2::new(b,
/// Chain2::new(c, d)))`, mirroring how spec.md's chain tables read
/// left-to-right.
#[macro_export]
macro_rules! chain {
    ($last:expr $(,)?) => {
        $last
    };
    ($head:expr, $($tail:expr),+ $(,)?) => {
        $crate::pipeline::Chain2::new($head, $crate::chain!($($tail),+))
    };
}

/// Drive a top-level stage with an input and a shared state, discarding
/// whatever the tail of the chain emits (every core chain's tail is a
/// `Callback`, whose observable effect is the callback invocation itself,
/// not its re-emitted value).
pub fn run<S, In, Out>(stage: &mut (impl Stage<S, In, Out> + ?Sized), input: In, state: &mut S) {
    stage.process(input, state, &mut |_out, _state| {});
}
