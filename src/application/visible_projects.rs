//! Visible projects controller
//!
//! Owns the project tree, the selection and the current filter, and drives a
//! [`ProjectsView`] after every state change. Hosts talk to this type only.

use std::collections::HashSet;

use crate::config::Config;
use crate::domain::entities::{ProjectTree, SelectionTree};
use crate::domain::ports::{ProjectItem, ProjectSource, ProjectsView};
use crate::domain::services::{compute_visible, is_refinement, FilterPattern};
use crate::domain::value_objects::{ProjectId, ShiftDirection, VisibleSet};
use crate::error::ProjectsResult;

use super::loader::load_tree;

/// Behaviour switches taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Leave selected projects out of the available list
    pub hide_selected: bool,
    /// Narrow progressively when a new filter extends the previous one
    pub auto_progressive: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            hide_selected: false,
            auto_progressive: true,
        }
    }
}

impl From<&Config> for ControllerOptions {
    fn from(config: &Config) -> Self {
        Self {
            hide_selected: config.selection.hide_selected,
            auto_progressive: config.filter.auto_progressive,
        }
    }
}

/// Project picker state plus the host hooks it renders into
pub struct VisibleProjects<S, V>
where
    S: ProjectSource,
    V: ProjectsView,
{
    source: S,
    view: V,
    options: ControllerOptions,
    tree: Option<ProjectTree>,
    selection: SelectionTree,
    /// Selected ids waiting for a tree to be restored against
    pending: Vec<ProjectId>,
    visible: VisibleSet,
    filter: String,
}

impl<S, V> VisibleProjects<S, V>
where
    S: ProjectSource,
    V: ProjectsView,
{
    /// Create a new controller with default options
    pub fn new(source: S, view: V) -> Self {
        Self::with_options(source, view, ControllerOptions::default())
    }

    pub fn with_options(source: S, view: V, options: ControllerOptions) -> Self {
        Self {
            source,
            view,
            options,
            tree: None,
            selection: SelectionTree::new(),
            pending: Vec::new(),
            visible: VisibleSet::new(),
            filter: String::new(),
        }
    }

    /// Seed previously persisted selected ids.
    ///
    /// Before the first load they are kept as-is; with a tree already
    /// installed the selection is rebuilt right away.
    pub fn with_selected<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ProjectId>,
    {
        self.pending = ids.into_iter().map(Into::into).collect();
        if let Some(tree) = &self.tree {
            self.selection = SelectionTree::restore(tree, &self.pending);
            self.refresh_full();
        }
        self
    }

    /// Load projects from `url` and replace the current tree.
    ///
    /// An empty url does nothing. Otherwise the loading indicator is raised,
    /// and lowered exactly once when the load finishes. A failed load is
    /// reported through [`ProjectsView::show_error`] and leaves the previous
    /// state untouched.
    pub fn load_projects(&mut self, url: &str) -> ProjectsResult<()> {
        if url.trim().is_empty() {
            return Ok(());
        }

        self.view.set_loading(true);
        let result = self.load_and_install(url);
        match &result {
            Ok(()) => self.render(),
            Err(err) => {
                tracing::warn!(url, %err, "failed to load projects");
                self.view.show_error(&err.to_string());
            }
        }
        self.view.set_loading(false);
        result
    }

    fn load_and_install(&mut self, url: &str) -> ProjectsResult<()> {
        let tree = load_tree(&self.source, url)?;
        let selection = SelectionTree::restore(&tree, self.selected_projects());
        let excluded = self.options.hide_selected.then(|| selection.id_set());
        let visible = compute_visible(&tree, &self.filter, None, excluded.as_ref())?;

        self.tree = Some(tree);
        self.selection = selection;
        self.pending.clear();
        self.visible = visible;
        Ok(())
    }

    /// Select a visible project and its visible descendants
    pub fn select_project(&mut self, id: &str) -> bool {
        let Some(tree) = &self.tree else {
            return false;
        };
        if !self.selection.select(tree, id, &self.visible) {
            return false;
        }
        if self.options.hide_selected {
            self.refresh_full();
        }
        self.render();
        true
    }

    /// Unselect a project and the projects below it selected with it or later
    pub fn unselect_project(&mut self, id: &str) -> bool {
        if self.tree.is_none() || !self.selection.unselect(id) {
            return false;
        }
        if self.options.hide_selected {
            self.refresh_full();
        }
        self.render();
        true
    }

    /// Move a selected project before its previous sibling, or after its next
    /// one when `reverse` is set
    pub fn shift_project(&mut self, id: &str, reverse: bool) -> bool {
        if self.tree.is_none() {
            return false;
        }
        if !self
            .selection
            .reorder(id, ShiftDirection::from_reverse(reverse))
        {
            return false;
        }
        self.render();
        true
    }

    /// Replace the filter text and recompute visibility.
    ///
    /// Runs progressively when `progressive` is set, or when automatic
    /// progression is enabled and `text` extends the current filter. On error
    /// the previous filter stays in place.
    pub fn apply_filter(&mut self, text: &str, progressive: bool) -> ProjectsResult<()> {
        FilterPattern::new(text)?;

        let progressive = progressive
            || (self.options.auto_progressive && is_refinement(&self.filter, text));
        let previous = std::mem::replace(&mut self.filter, text.to_string());

        let Some(tree) = &self.tree else {
            return Ok(());
        };
        let excluded = self.excluded();
        let prior = progressive.then_some(&self.visible);
        match compute_visible(tree, text, prior, excluded.as_ref()) {
            Ok(visible) => {
                self.visible = visible;
                self.render();
                Ok(())
            }
            Err(err) => {
                self.filter = previous;
                Err(err)
            }
        }
    }

    /// Selected ids in display order, ready to persist
    pub fn selected_projects(&self) -> Vec<ProjectId> {
        if self.tree.is_some() {
            self.selection.serialize()
        } else {
            self.pending.clone()
        }
    }

    pub fn options(&self) -> ControllerOptions {
        self.options
    }

    pub fn tree(&self) -> Option<&ProjectTree> {
        self.tree.as_ref()
    }

    pub fn selection(&self) -> &SelectionTree {
        &self.selection
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Push both lists to the view
    pub fn render(&self) {
        let Some(tree) = &self.tree else {
            return;
        };
        let available: Vec<ProjectItem> = tree
            .flatten_children(Some(&self.visible))
            .iter()
            .filter_map(|id| tree.get(id.as_str()))
            .map(ProjectItem::from)
            .collect();
        let selected: Vec<ProjectItem> = self.selection.iter().map(ProjectItem::from).collect();
        self.view.show_projects(&available, &selected);
    }

    fn excluded(&self) -> Option<HashSet<ProjectId>> {
        self.options.hide_selected.then(|| self.selection.id_set())
    }

    /// Full recompute under the current filter. The filter was validated when
    /// it was stored, so a failure here only keeps the old visible set.
    fn refresh_full(&mut self) {
        let Some(tree) = &self.tree else {
            return;
        };
        let excluded = self.excluded();
        match compute_visible(tree, &self.filter, None, excluded.as_ref()) {
            Ok(visible) => self.visible = visible,
            Err(err) => tracing::warn!(%err, "keeping previous visible projects"),
        }
    }
}
