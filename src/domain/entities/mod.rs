//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `ProjectRecord` - A raw record delivered by a project source
//! - `ProjectTree` - The indexed project hierarchy
//! - `SelectionTree` - The ordered tree of selected projects

mod project;
mod project_tree;
mod selection_tree;

pub use project::{ProjectNode, ProjectRecord, ProjectsPayload, PATH_SEPARATOR};
pub use project_tree::{Preorder, ProjectTree};
pub use selection_tree::{SelectionNode, SelectionTree, DISPLAY_SEPARATOR};
