//! `DeltaIntegrate`: trapezoidal numerical integration between successive
//! events, expressed as a per-sample increment.

use crate::event::{AxesEvent, TICKS_TO_SECONDS};
use crate::math::{vadd, vscale};
use crate::pipeline::Stage;

/// On the first event, stores it and emits nothing. On every subsequent
/// event, emits the trapezoidal-rule increment between it and the
/// previously stored event, then replaces the stored event.
#[derive(Default)]
pub struct DeltaIntegrate {
    previous: Option<AxesEvent>,
}

impl DeltaIntegrate {
    /// A fresh stage with no stored predecessor.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> Stage<S, AxesEvent, AxesEvent> for DeltaIntegrate {
    fn process(
        &mut self,
        input: AxesEvent,
        state: &mut S,
        sink: &mut dyn FnMut(AxesEvent, &mut S),
    ) {
        if let Some(previous) = self.previous {
            let dt = (input.timestamp - previous.timestamp) as f64 * TICKS_TO_SECONDS;
            let delta = vscale(vadd(input.value, previous.value), dt / 2.0);
            sink(AxesEvent::new(input.kind, input.timestamp, delta), state);
        }
        self.previous = Some(input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    #[test]
    fn first_event_is_stored_and_dropped() {
        let mut stage = DeltaIntegrate::new();
        let mut emitted = Vec::new();
        let e = AxesEvent::new(EventKind::Accelerometer, 0, [2.0, 0.0, 0.0]);
        Stage::<(), _, _>::process(&mut stage, e, &mut (), &mut |o, _| emitted.push(o));
        assert!(emitted.is_empty());
    }

    #[test]
    fn trapezoid_rule_matches_spec_example() {
        let mut stage = DeltaIntegrate::new();
        let mut emitted = Vec::new();
        let e0 = AxesEvent::new(EventKind::Accelerometer, 0, [2.0, 0.0, 0.0]);
        let e1 = AxesEvent::new(EventKind::Accelerometer, 1_000_000_000, [4.0, 0.0, 0.0]);
        let e2 = AxesEvent::new(EventKind::Accelerometer, 2_000_000_000, [4.0, 0.0, 0.0]);
        Stage::<(), _, _>::process(&mut stage, e0, &mut (), &mut |o, _| emitted.push(o));
        Stage::<(), _, _>::process(&mut stage, e1, &mut (), &mut |o, _| emitted.push(o));
        Stage::<(), _, _>::process(&mut stage, e2, &mut (), &mut |o, _| emitted.push(o));
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0].value, [3.0, 0.0, 0.0]);
        assert_eq!(emitted[0].timestamp, 1_000_000_000);
        assert_eq!(emitted[1].value, [4.0, 0.0, 0.0]);
    }
}
