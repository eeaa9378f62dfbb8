//! `ChangeType(k)`: sets the output kind, leaves other fields untouched.

use crate::event::{AxesEvent, EventKind};
use crate::pipeline::Stage;

/// Rewrites an event's kind to `kind`, leaving its timestamp and value
/// untouched.
pub struct ChangeType {
    kind: EventKind,
}

impl ChangeType {
    /// Build a stage that rewrites events to the given kind.
    pub fn new(kind: EventKind) -> Self {
        Self { kind }
    }
}

impl<S> Stage<S, AxesEvent, AxesEvent> for ChangeType {
    fn process(
        &mut self,
        mut input: AxesEvent,
        state: &mut S,
        sink: &mut dyn FnMut(AxesEvent, &mut S),
    ) {
        input.kind = self.kind;
        sink(input, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_kind_only() {
        let mut stage = ChangeType::new(EventKind::Velocity);
        let e = AxesEvent::new(EventKind::Accelerometer, 42, [1.0, 2.0, 3.0]);
        let mut out = None;
        Stage::<(), _, _>::process(&mut stage, e, &mut (), &mut |o, _| out = Some(o));
        let out = out.unwrap();
        assert_eq!(out.kind, EventKind::Velocity);
        assert_eq!(out.timestamp, 42);
        assert_eq!(out.value, [1.0, 2.0, 3.0]);
    }
}
