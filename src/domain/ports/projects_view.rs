//! ProjectsView port - the host's rendering and notification hooks
//!
//! The core hands over two ordered lists (available and selected projects)
//! and never renders anything itself.

use crate::domain::entities::{ProjectNode, SelectionNode};
use crate::domain::value_objects::ProjectId;

/// One row of a rendered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: ProjectId,
    /// Project name, or the folded display name for selected projects
    pub name: String,
    /// Depth below the (hidden) root, starting at 1
    pub level: usize,
    pub has_children: bool,
}

impl From<&ProjectNode> for ProjectItem {
    fn from(node: &ProjectNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            level: node.level,
            has_children: node.has_children(),
        }
    }
}

impl From<&SelectionNode> for ProjectItem {
    fn from(node: &SelectionNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.display_name.clone(),
            level: node.level,
            has_children: node.has_children(),
        }
    }
}

/// Host hooks driven by the controller
///
/// Implementations can be:
/// - TextView: indented listing in the terminal
/// - JsonView: NDJSON event stream
/// - NoopView: silent operation
pub trait ProjectsView {
    /// Toggle the loading indicator
    fn set_loading(&self, loading: bool);

    /// Replace both rendered lists
    fn show_projects(&self, available: &[ProjectItem], selected: &[ProjectItem]);

    /// Surface a load error to the user
    fn show_error(&self, message: &str);
}

/// No-op view for silent operation
pub struct NoopView;

impl ProjectsView for NoopView {
    fn set_loading(&self, _loading: bool) {}

    fn show_projects(&self, _available: &[ProjectItem], _selected: &[ProjectItem]) {}

    fn show_error(&self, _message: &str) {}
}

impl<V: ProjectsView + ?Sized> ProjectsView for Box<V> {
    fn set_loading(&self, loading: bool) {
        (**self).set_loading(loading)
    }

    fn show_projects(&self, available: &[ProjectItem], selected: &[ProjectItem]) {
        (**self).show_projects(available, selected)
    }

    fn show_error(&self, message: &str) {
        (**self).show_error(message)
    }
}

impl<V: ProjectsView + ?Sized> ProjectsView for &V {
    fn set_loading(&self, loading: bool) {
        (**self).set_loading(loading)
    }

    fn show_projects(&self, available: &[ProjectItem], selected: &[ProjectItem]) {
        (**self).show_projects(available, selected)
    }

    fn show_error(&self, message: &str) {
        (**self).show_error(message)
    }
}
