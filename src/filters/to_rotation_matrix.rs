//! `ToRotationMatrix`: turns an instantaneous rotation delta into a
//! rotation matrix.

use crate::event::{AxesEvent, OrientationEvent};
use crate::math::{norm, rotation_matrix_axis_angle};
use crate::pipeline::Stage;

/// Given an axes event whose value is a rotation delta `(u, v, w)`,
/// emits an orientation event whose matrix is
/// `rotation_matrix_axis_angle((u, v, w), ‖(u, v, w)‖)`.
#[derive(Default)]
pub struct ToRotationMatrix;

impl ToRotationMatrix {
    /// Construct a new stage.
    pub fn new() -> Self {
        Self
    }
}

impl<S> Stage<S, AxesEvent, OrientationEvent> for ToRotationMatrix {
    fn process(
        &mut self,
        input: AxesEvent,
        state: &mut S,
        sink: &mut dyn FnMut(OrientationEvent, &mut S),
    ) {
        let angle = norm(&input.value);
        let matrix = rotation_matrix_axis_angle(input.value, angle);
        sink(
            OrientationEvent::new(input.kind, input.timestamp, matrix),
            state,
        );
    }
}
