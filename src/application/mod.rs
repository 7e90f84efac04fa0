//! Application Layer
//!
//! Orchestrates domain services and infrastructure ports for hosts.
//!
//! ## Components
//!
//! - `loader` - Fetch, decode and build a project tree
//! - `VisibleProjects` - The picker controller: load, filter, select, reorder

pub mod loader;
mod visible_projects;

pub use loader::load_tree;
pub use visible_projects::{ControllerOptions, VisibleProjects};
