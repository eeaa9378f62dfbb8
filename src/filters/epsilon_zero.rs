//! `EpsilonZero(ε)`: zeroes a too-small value, passes through otherwise.

use crate::event::AxesEvent;
use crate::math::norm;
use crate::pipeline::Stage;

/// If `‖e.value‖ < epsilon`, replaces `e.value` with the zero vector;
/// otherwise forwards `e` unchanged. Kind and timestamp are always
/// preserved.
pub struct EpsilonZero {
    epsilon: f64,
}

impl EpsilonZero {
    /// Build a stage with the given threshold.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl<S> Stage<S, AxesEvent, AxesEvent> for EpsilonZero {
    fn process(
        &mut self,
        mut input: AxesEvent,
        state: &mut S,
        sink: &mut dyn FnMut(AxesEvent, &mut S),
    ) {
        if norm(&input.value) < self.epsilon {
            input.value = [0.0, 0.0, 0.0];
        }
        sink(input, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    #[test]
    fn below_threshold_is_zeroed() {
        let mut stage = EpsilonZero::new(0.1);
        let e = AxesEvent::new(EventKind::Accelerometer, 0, [0.05, 0.0, 0.0]);
        let mut out = None;
        Stage::<(), _, _>::process(&mut stage, e, &mut (), &mut |o, _| out = Some(o));
        assert_eq!(out.unwrap().value, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn above_threshold_passes_through() {
        let mut stage = EpsilonZero::new(0.1);
        let e = AxesEvent::new(EventKind::Accelerometer, 0, [0.2, 0.0, 0.0]);
        let mut out = None;
        Stage::<(), _, _>::process(&mut stage, e, &mut (), &mut |o, _| out = Some(o));
        assert_eq!(out.unwrap().value, [0.2, 0.0, 0.0]);
    }
}
