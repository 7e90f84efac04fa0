//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod project_id;
mod shift_direction;
mod visible_set;

pub use project_id::ProjectId;
pub use shift_direction::ShiftDirection;
pub use visible_set::VisibleSet;
