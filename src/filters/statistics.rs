//! `Statistics(&stats, W)`: maintains a sliding window of the last `W`
//! events and an online mean/variance over it (spec.md §4.5).

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::event::{AxesEvent, SensorStats};
use crate::math::{dot, norm, vadd, vdiv, vsub};
use crate::pipeline::Stage;

/// Windowed mean/variance accumulator.
///
/// The `M2` accumulator from Welford's algorithm is kept internally
/// rather than on [`SensorStats`] — only `variance = M2 / (count - 1)`
/// is exposed, matching spec.md §3's public data model.
pub struct Statistics<S, Sel> {
    select: Sel,
    window_size: usize,
    window: VecDeque<AxesEvent>,
    m2: f64,
    _marker: PhantomData<S>,
}

impl<S, Sel> Statistics<S, Sel>
where
    Sel: Fn(&mut S) -> &mut SensorStats,
{
    /// Build a stage with the given window size, targeting the
    /// `SensorStats` `select` projects out of the shared state.
    pub fn new(window_size: u64, select: Sel) -> Self {
        Self {
            select,
            window_size: window_size as usize,
            window: VecDeque::with_capacity(window_size as usize),
            m2: 0.0,
            _marker: PhantomData,
        }
    }
}

impl<S, Sel> Stage<S, AxesEvent, AxesEvent> for Statistics<S, Sel>
where
    Sel: Fn(&mut S) -> &mut SensorStats,
{
    fn process(
        &mut self,
        input: AxesEvent,
        state: &mut S,
        sink: &mut dyn FnMut(AxesEvent, &mut S),
    ) {
        let stats = (self.select)(state);

        if self.window.len() == self.window_size {
            if let Some(oldest) = self.window.pop_front() {
                stats.count -= 1;
                let delta = vsub(oldest.value, stats.mean);
                stats.mean = vsub(stats.mean, vdiv(delta, stats.count as f64));
                self.m2 -= norm(&delta) * norm(&vsub(oldest.value, stats.mean));
                stats.squares -= dot(&oldest.value, &oldest.value);
            }
        }

        stats.count += 1;
        let delta = vsub(input.value, stats.mean);
        stats.mean = vadd(stats.mean, vdiv(delta, stats.count as f64));
        stats.mean_magnitude = norm(&stats.mean);
        self.m2 += norm(&delta) * norm(&vsub(input.value, stats.mean));
        stats.squares += dot(&input.value, &input.value);
        self.window.push_back(input);

        if stats.count > 1 {
            stats.variance = self.m2 / (stats.count - 1) as f64;
            let front = self.window.front().expect("just pushed an event").timestamp_seconds();
            let back = self.window.back().expect("just pushed an event").timestamp_seconds();
            stats.rate = stats.count as f64 / (back - front);
        }

        sink(input, state);
    }
}
