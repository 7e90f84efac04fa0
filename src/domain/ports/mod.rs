//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod project_source;
pub mod projects_view;
pub mod selection_store;

pub use project_source::{ProjectSource, SourceResponse};
pub use projects_view::{NoopView, ProjectItem, ProjectsView};
pub use selection_store::SelectionStore;
