//! Stateless and near-stateless filter stages (spec.md §4.4).
//!
//! Each stage here implements [`crate::pipeline::Stage`] and is generic
//! over the shared-state type `S` it's composed against, so the same
//! stage types serve all four tracker chains without duplication.

mod add_value_to;
mod callback;
mod change_type;
mod delta_integrate;
mod drop_n;
mod epsilon_zero;
mod function_filter;
mod post_multiply_the;
mod pre_multiply_by;
mod remove_value_of;
mod statistics;
mod to_rotation_matrix;

pub use add_value_to::AddValueTo;
pub use callback::{Callback, CallbackSlot};
pub use change_type::ChangeType;
pub use delta_integrate::DeltaIntegrate;
pub use drop_n::DropN;
pub use epsilon_zero::EpsilonZero;
pub use function_filter::FunctionFilter;
pub use post_multiply_the::PostMultiplyThe;
pub use pre_multiply_by::PreMultiplyBy;
pub use remove_value_of::RemoveValueOf;
pub use statistics::Statistics;
pub use to_rotation_matrix::ToRotationMatrix;
