//! Visible projects - project picker core
//!
//! Loads a project hierarchy from a projects endpoint (or a saved payload),
//! narrows it with a text filter and keeps an ordered tree of selected
//! projects. Rendering is left to the host through the `ProjectsView` port.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{load_tree, ControllerOptions, VisibleProjects};
pub use config::Config;
pub use domain::entities::{ProjectNode, ProjectRecord, ProjectTree, SelectionNode, SelectionTree};
pub use domain::ports::{ProjectItem, ProjectSource, ProjectsView, SelectionStore, SourceResponse};
pub use domain::services::{compute_visible, is_refinement, FilterPattern};
pub use domain::value_objects::{ProjectId, ShiftDirection, VisibleSet};
pub use error::{ProjectsError, ProjectsResult};
