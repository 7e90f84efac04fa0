//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod filter;

pub use filter::{compute_visible, is_refinement, FilterPattern};
