//! Project tree
//!
//! Indexed tree built from a flat, parent-ordered record list. Construction is
//! a single left-to-right pass: each record's parent must already be indexed.

use std::collections::HashMap;

use super::project::{ProjectNode, ProjectRecord};
use crate::domain::value_objects::{ProjectId, VisibleSet};
use crate::error::{ProjectsError, ProjectsResult};

/// Project hierarchy with an id index
#[derive(Debug, Clone)]
pub struct ProjectTree {
    root: ProjectId,
    nodes: HashMap<ProjectId, ProjectNode>,
}

impl ProjectTree {
    /// Build a tree from records ordered parents-before-children.
    ///
    /// The first record is the root; its parent reference is ignored. Nothing
    /// is returned on error, so a failed build never leaves a partial tree
    /// behind.
    pub fn build(records: impl IntoIterator<Item = ProjectRecord>) -> ProjectsResult<Self> {
        let mut records = records.into_iter();
        let root_record = records.next().ok_or(ProjectsError::EmptyPayload)?;

        let (lower, _) = records.size_hint();
        let mut nodes = HashMap::with_capacity(lower + 1);
        let root = ProjectNode::root(root_record);
        let root_id = root.id.clone();
        nodes.insert(root_id.clone(), root);

        for record in records {
            if nodes.contains_key(&record.id) {
                return Err(ProjectsError::DuplicateProject { id: record.id });
            }
            let parent_id = match &record.parent_project_id {
                Some(parent_id) => parent_id.clone(),
                None => return Err(ProjectsError::MissingParent { id: record.id }),
            };
            let Some(parent) = nodes.get_mut(&parent_id) else {
                return Err(ProjectsError::MalformedHierarchy {
                    id: record.id,
                    parent_id,
                });
            };

            let node = ProjectNode::child_of(parent, record);
            parent.children.push(node.id.clone());
            nodes.insert(node.id.clone(), node);
        }

        tracing::debug!(projects = nodes.len(), root = %root_id, "project tree built");

        Ok(Self {
            root: root_id,
            nodes,
        })
    }

    pub fn root_id(&self) -> &ProjectId {
        &self.root
    }

    pub fn root(&self) -> &ProjectNode {
        &self.nodes[&self.root]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&ProjectNode> {
        self.nodes.get(id)
    }

    /// Like [`get`](Self::get) but reports a missing id as `NotFound`
    pub fn require(&self, id: &str) -> ProjectsResult<&ProjectNode> {
        self.nodes.get(id).ok_or_else(|| ProjectsError::NotFound {
            id: ProjectId::from(id),
        })
    }

    /// Parent node, `None` for the root or a detached node
    pub fn parent_of(&self, id: &str) -> Option<&ProjectNode> {
        let parent_id = self.nodes.get(id)?.parent_id.as_ref()?;
        self.nodes.get(parent_id)
    }

    /// Ancestors of `id`, nearest first, ending with the root
    pub fn ancestors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a ProjectNode> + 'a {
        let mut next = self.parent_of(id);
        std::iter::from_fn(move || {
            let current = next?;
            next = current
                .parent_id
                .as_ref()
                .and_then(|parent_id| self.nodes.get(parent_id));
            Some(current)
        })
    }

    /// Children of `id` in insertion order
    pub fn children<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a ProjectNode> + 'a {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.nodes.get(child))
    }

    /// Detach a node from its parent and drop it from the index.
    ///
    /// Descendants stay indexed; cascading removal is the caller's policy.
    pub fn remove(&mut self, id: &str) -> ProjectsResult<ProjectNode> {
        if self.root.as_str() == id {
            return Err(ProjectsError::CannotRemoveRoot {
                id: self.root.clone(),
            });
        }
        let node = self.nodes.remove(id).ok_or_else(|| ProjectsError::NotFound {
            id: ProjectId::from(id),
        })?;
        if let Some(parent) = node
            .parent_id
            .as_ref()
            .and_then(|parent_id| self.nodes.get_mut(parent_id))
        {
            parent.children.retain(|child| child != &node.id);
        }
        Ok(node)
    }

    /// Pre-order ids starting at `start`.
    ///
    /// `id_filter` decides which ids are emitted; traversal always descends
    /// into every child.
    pub fn flatten(&self, start: &str, id_filter: Option<&VisibleSet>) -> Vec<ProjectId> {
        self.flatten_matching(start, |node| {
            id_filter.map_or(true, |visible| visible.contains(node.id.as_str()))
        })
    }

    /// Pre-order ids below the root (root excluded), filtered like
    /// [`flatten`](Self::flatten)
    pub fn flatten_children(&self, id_filter: Option<&VisibleSet>) -> Vec<ProjectId> {
        let mut ids = self.flatten(self.root.as_str(), id_filter);
        if ids.first() == Some(&self.root) {
            ids.remove(0);
        }
        ids
    }

    /// Pre-order ids starting at `start` for which `keep` returns true
    pub fn flatten_matching(
        &self,
        start: &str,
        keep: impl Fn(&ProjectNode) -> bool,
    ) -> Vec<ProjectId> {
        self.preorder_from(start)
            .filter(|node| keep(node))
            .map(|node| node.id.clone())
            .collect()
    }

    /// Pre-order walk of the whole tree
    pub fn iter_preorder(&self) -> Preorder<'_> {
        self.preorder_from(self.root.as_str())
    }

    /// Pre-order walk starting at `start` (empty when `start` is unknown)
    pub fn preorder_from(&self, start: &str) -> Preorder<'_> {
        let stack = self.nodes.get(start).into_iter().collect();
        Preorder { tree: self, stack }
    }
}

/// Depth-first pre-order iterator over a [`ProjectTree`]
pub struct Preorder<'a> {
    tree: &'a ProjectTree,
    stack: Vec<&'a ProjectNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a ProjectNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let tree = self.tree;
        self.stack.extend(
            node.children
                .iter()
                .rev()
                .filter_map(|child| tree.nodes.get(child)),
        );
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, parent: &str, name: &str) -> ProjectRecord {
        ProjectRecord::new(id, Some(parent), name)
    }

    fn sample_tree() -> ProjectTree {
        ProjectTree::build(vec![
            ProjectRecord::root("_Root", "<Root project>"),
            record("A", "_Root", "A"),
            record("B", "A", "B"),
            record("C", "A", "C"),
            record("D", "_Root", "D"),
        ])
        .unwrap()
    }

    fn ids(values: &[ProjectId]) -> Vec<&str> {
        values.iter().map(ProjectId::as_str).collect()
    }

    #[test]
    fn build_computes_level_and_full_path() {
        let tree = ProjectTree::build(vec![
            ProjectRecord::root("root", "Root"),
            record("A", "root", "A"),
            record("B", "A", "B"),
        ])
        .unwrap();

        let b = tree.get("B").unwrap();
        assert_eq!(b.level, 2);
        assert_eq!(b.full_path, "::a::b");
        assert_eq!(tree.root().full_path, "");
        assert_eq!(tree.root().level, 0);
    }

    #[test]
    fn build_ignores_root_parent_reference() {
        let tree = ProjectTree::build(vec![ProjectRecord::new("r", Some("whatever"), "R")]).unwrap();
        assert!(tree.root().is_root());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn build_rejects_forward_reference() {
        let err = ProjectTree::build(vec![
            ProjectRecord::root("r", "R"),
            record("B", "A", "B"),
            record("A", "r", "A"),
        ])
        .unwrap_err();

        match err {
            ProjectsError::MalformedHierarchy { id, parent_id } => {
                assert_eq!(id.as_str(), "B");
                assert_eq!(parent_id.as_str(), "A");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn build_rejects_missing_parent_and_duplicates() {
        let missing = ProjectTree::build(vec![
            ProjectRecord::root("r", "R"),
            ProjectRecord::new("A", None, "A"),
        ]);
        assert!(matches!(missing, Err(ProjectsError::MissingParent { .. })));

        let duplicate = ProjectTree::build(vec![
            ProjectRecord::root("r", "R"),
            record("A", "r", "A"),
            record("A", "r", "A again"),
        ]);
        assert!(matches!(duplicate, Err(ProjectsError::DuplicateProject { .. })));
    }

    #[test]
    fn build_rejects_empty_input() {
        let result = ProjectTree::build(Vec::new());
        assert!(matches!(result, Err(ProjectsError::EmptyPayload)));
    }

    #[test]
    fn flatten_is_preorder_in_insertion_order() {
        let tree = sample_tree();
        assert_eq!(
            ids(&tree.flatten("_Root", None)),
            vec!["_Root", "A", "B", "C", "D"]
        );
        assert_eq!(ids(&tree.flatten("A", None)), vec!["A", "B", "C"]);
        assert!(tree.flatten("missing", None).is_empty());
    }

    #[test]
    fn flatten_filter_selects_output_not_traversal() {
        let tree = sample_tree();
        // A is filtered out, yet its children are still reached.
        let visible: VisibleSet = ["_Root", "B", "D"].into_iter().collect();
        assert_eq!(
            ids(&tree.flatten("_Root", Some(&visible))),
            vec!["_Root", "B", "D"]
        );
        assert_eq!(
            ids(&tree.flatten_children(Some(&visible))),
            vec!["B", "D"]
        );
    }

    #[test]
    fn ancestors_walk_to_root() {
        let tree = sample_tree();
        let chain: Vec<&str> = tree.ancestors("B").map(|n| n.id.as_str()).collect();
        assert_eq!(chain, vec!["A", "_Root"]);
        assert_eq!(tree.ancestors("_Root").count(), 0);
    }

    #[test]
    fn remove_detaches_from_parent_and_index() {
        let mut tree = sample_tree();

        let removed = tree.remove("B").unwrap();

        assert_eq!(removed.id.as_str(), "B");
        assert!(!tree.contains("B"));
        let children: Vec<&str> = tree.children("A").map(|n| n.id.as_str()).collect();
        assert_eq!(children, vec!["C"]);
    }

    #[test]
    fn remove_does_not_cascade() {
        let mut tree = sample_tree();
        tree.remove("A").unwrap();

        assert!(tree.contains("B"));
        assert_eq!(ids(&tree.flatten("_Root", None)), vec!["_Root", "D"]);
    }

    #[test]
    fn remove_reports_unknown_and_root() {
        let mut tree = sample_tree();
        assert!(matches!(
            tree.remove("nope"),
            Err(ProjectsError::NotFound { .. })
        ));
        assert!(matches!(
            tree.remove("_Root"),
            Err(ProjectsError::CannotRemoveRoot { .. })
        ));
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn require_reports_not_found() {
        let tree = sample_tree();
        assert!(tree.require("A").is_ok());
        assert!(matches!(
            tree.require("Z"),
            Err(ProjectsError::NotFound { .. })
        ));
    }
}
