//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `sources/` - Project sources (HTTP, file, in-memory)
//! - `views/` - Views (text, JSON, recording) and item templates
//! - `store/` - Selection persistence

pub mod sources;
pub mod store;
pub mod views;

// Re-export for convenience
pub use sources::{source_for, FileProjectSource, HttpProjectSource, StaticProjectSource};
pub use store::JsonSelectionStore;
pub use views::{JsonView, ProjectTemplate, RecordingView, TextView};
