//! Selection tree
//!
//! An ordered tree over the selected subset of a [`ProjectTree`]. Its shape is
//! independent of the project tree: a selected node hangs under its nearest
//! selected project ancestor, and every unselected ancestor in between is
//! elided with its name folded into the node's display name.
//!
//! Child order is significant. It starts as insertion order and changes only
//! through [`SelectionTree::reorder`]; [`SelectionTree::serialize`] captures it
//! for persistence.
//!
//! Every `select` call inserts its nodes as one batch. Unselecting a node
//! removes the nodes of its batch and of later batches below it. Nodes that
//! were selected earlier and only adopted by the branch go back to where they
//! were, so a select followed by the matching unselect leaves the selection
//! as it was. A restored selection counts as a single batch.

use std::collections::{HashMap, HashSet};

use super::project_tree::ProjectTree;
use crate::domain::value_objects::{ProjectId, ShiftDirection, VisibleSet};

/// Joins elided ancestor names in a display name
pub const DISPLAY_SEPARATOR: &str = " → ";

/// A selected project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionNode {
    pub id: ProjectId,
    /// Project name, prefixed by the names of elided ancestors
    pub display_name: String,
    /// Nodes attached to the selection root have level 1
    pub level: usize,
    /// `None` when attached directly to the selection root
    pub parent: Option<ProjectId>,
    pub children: Vec<ProjectId>,
}

impl SelectionNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionTree {
    roots: Vec<ProjectId>,
    nodes: HashMap<ProjectId, SelectionNode>,
    /// Batch that inserted each node
    batches: HashMap<ProjectId, u64>,
    /// Where an adopted node sat before each adoption, oldest first
    placements: HashMap<ProjectId, Vec<Placement>>,
    /// Sibling lists as they were when the current batch first adopted from
    /// them, keyed by parent
    snapshots: HashMap<Option<ProjectId>, Vec<ProjectId>>,
    next_batch: u64,
}

/// Slot an adopted node was taken from
#[derive(Debug, Clone, PartialEq, Eq)]
struct Placement {
    /// Batch of the adopting node
    batch: u64,
    parent: Option<ProjectId>,
    /// Sibling order before the adopting batch
    order: Vec<ProjectId>,
}

/// A surviving node whose selection parent is being removed
struct Reattach {
    id: ProjectId,
    parent: Option<ProjectId>,
    display_name: String,
}

/// Two selections are equal when they have the same shape; batch history is
/// not compared.
impl PartialEq for SelectionTree {
    fn eq(&self, other: &Self) -> bool {
        self.roots == other.roots && self.nodes == other.nodes
    }
}

impl Eq for SelectionTree {}

impl SelectionTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a selection from a persisted ordered id list.
    ///
    /// Ids unknown to `tree` are dropped. A listed ancestor is inserted before
    /// its descendants even when it appears later in the list.
    pub fn restore<I, S>(tree: &ProjectTree, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<ProjectId> = ids
            .into_iter()
            .map(|id| {
                let id: &str = id.as_ref();
                ProjectId::from(id)
            })
            .collect();
        let pending: HashSet<ProjectId> = ids
            .iter()
            .filter(|id| tree.contains(id.as_str()))
            .cloned()
            .collect();

        let mut selection = Self::new();
        let batch = selection.begin_batch();
        for id in &ids {
            let id = id.as_str();
            if !tree.contains(id) {
                tracing::warn!(project = id, "dropping stale selected project");
                continue;
            }
            selection.insert_with(tree, id, &pending, batch);
        }
        selection
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

    pub fn get(&self, id: &str) -> Option<&SelectionNode> {
        self.nodes.get(id)
    }

    /// Ids attached directly to the selection root, in order
    pub fn roots(&self) -> &[ProjectId] {
        &self.roots
    }

    /// The selected ids as a set, for excluding them from the available list
    pub fn id_set(&self) -> HashSet<ProjectId> {
        self.nodes.keys().cloned().collect()
    }

    /// Select `id` together with its currently visible descendants.
    ///
    /// Returns `false` without touching the selection when `id` is already
    /// selected, is not visible, is unknown or is the project root.
    pub fn select(&mut self, tree: &ProjectTree, id: &str, visible: &VisibleSet) -> bool {
        if self.contains(id) || !visible.contains(id) {
            return false;
        }
        let Some(start) = tree.get(id) else {
            return false;
        };
        if start.is_root() {
            return false;
        }

        let mut stack = vec![start];
        let mut order = Vec::new();
        while let Some(node) = stack.pop() {
            order.push(node.id.clone());
            stack.extend(
                tree.children(node.id.as_str())
                    .filter(|child| visible.contains(child.id.as_str()))
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev(),
            );
        }

        let batch = self.begin_batch();
        for project in &order {
            self.insert_with(tree, project.as_str(), &HashSet::new(), batch);
        }
        tracing::debug!(project = id, inserted = order.len(), "projects selected");
        true
    }

    /// Insert a single project, returning the existing node when already
    /// selected. `None` for ids unknown to `tree` and for the project root.
    pub fn insert_node(&mut self, tree: &ProjectTree, id: &str) -> Option<&SelectionNode> {
        let batch = self.begin_batch();
        let inserted = self.insert_with(tree, id, &HashSet::new(), batch)?;
        self.nodes.get(&inserted)
    }

    /// Unselect `id` and the branch selected with it or after it.
    ///
    /// Nodes below `id` that were selected before it are kept and moved back
    /// to their nearest remaining selected ancestor, at their old position
    /// when that ancestor is the one they were adopted from. A parent left
    /// without children is unselected too when it came from the same batch.
    pub fn unselect(&mut self, id: &str) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        let parent = node.parent.clone();
        let batch = self.batch_of(id);

        let subtree = self.subtree(id);
        let removed: HashSet<ProjectId> = subtree
            .iter()
            .filter(|member| member.as_str() == id || self.batch_of(member.as_str()) >= batch)
            .cloned()
            .collect();
        let kept: Vec<ProjectId> = subtree
            .into_iter()
            .filter(|member| !removed.contains(member))
            .collect();
        let moved: Vec<Reattach> = kept
            .iter()
            .filter_map(|survivor| self.reattachment(survivor, &removed))
            .collect();

        match &parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.nodes.get_mut(parent_id) {
                    parent_node.children.retain(|child| child.as_str() != id);
                }
            }
            None => self.roots.retain(|root| root.as_str() != id),
        }
        for survivor in &kept {
            if let Some(node) = self.nodes.get_mut(survivor) {
                node.children.retain(|child| !removed.contains(child));
            }
        }
        for gone in &removed {
            self.forget(gone.as_str());
        }

        for reattach in moved {
            let order = self
                .take_placement(&reattach.id, batch)
                .filter(|origin| origin.parent == reattach.parent)
                .map(|origin| origin.order);
            self.reattach(reattach, order.as_deref());
        }
        if !kept.is_empty() {
            tracing::debug!(project = id, kept = kept.len(), "kept earlier selections");
        }

        if let Some(parent_id) = parent {
            let emptied = self
                .nodes
                .get(&parent_id)
                .is_some_and(|parent_node| parent_node.children.is_empty());
            if emptied && self.batch_of(parent_id.as_str()) == batch {
                self.unselect(parent_id.as_str());
            }
        }
        true
    }

    /// Remove `id` and its selection subtree. With `collapse_empty_parent`
    /// the parent is removed as well once it has no children left, and so on
    /// upwards; the selection root itself is never removed.
    pub fn remove_node(&mut self, id: &str, collapse_empty_parent: bool) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        let parent = node.parent.clone();

        match &parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.nodes.get_mut(parent_id) {
                    parent_node.children.retain(|child| child.as_str() != id);
                }
            }
            None => self.roots.retain(|root| root.as_str() != id),
        }
        self.drop_subtree(id);

        if collapse_empty_parent {
            if let Some(parent_id) = parent {
                let emptied = self
                    .nodes
                    .get(&parent_id)
                    .is_some_and(|parent_node| parent_node.children.is_empty());
                if emptied {
                    self.remove_node(parent_id.as_str(), true);
                }
            }
        }
        true
    }

    /// Swap `id` with its adjacent sibling. `false` at either boundary or
    /// for an unselected id.
    pub fn reorder(&mut self, id: &str, direction: ShiftDirection) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        let siblings = match node.parent.clone() {
            Some(parent_id) => match self.nodes.get_mut(&parent_id) {
                Some(parent_node) => &mut parent_node.children,
                None => return false,
            },
            None => &mut self.roots,
        };

        let Some(index) = siblings.iter().position(|sibling| sibling.as_str() == id) else {
            return false;
        };
        match direction.neighbour(index, siblings.len()) {
            Some(other) => {
                siblings.swap(index, other);
                true
            }
            None => false,
        }
    }

    /// Selected ids in pre-order, following the current child order
    pub fn serialize(&self) -> Vec<ProjectId> {
        self.iter().map(|node| node.id.clone()).collect()
    }

    /// Selected nodes in pre-order, following the current child order
    pub fn iter(&self) -> impl Iterator<Item = &SelectionNode> + '_ {
        let mut stack: Vec<&ProjectId> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = self.nodes.get(stack.pop()?)?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    fn begin_batch(&mut self) -> u64 {
        self.snapshots.clear();
        let batch = self.next_batch;
        self.next_batch += 1;
        batch
    }

    fn batch_of(&self, id: &str) -> u64 {
        self.batches.get(id).copied().unwrap_or_default()
    }

    /// `id` and its selection descendants in pre-order
    fn subtree(&self, id: &str) -> Vec<ProjectId> {
        let mut stack = vec![ProjectId::from(id)];
        let mut members = Vec::new();
        while let Some(member) = stack.pop() {
            if let Some(node) = self.nodes.get(&member) {
                stack.extend(node.children.iter().rev().cloned());
            }
            members.push(member);
        }
        members
    }

    /// New parent and display name for `survivor` when its parent chain up to
    /// the first kept node is removed. `None` when its parent stays.
    fn reattachment(&self, survivor: &ProjectId, removed: &HashSet<ProjectId>) -> Option<Reattach> {
        let node = self.nodes.get(survivor)?;
        let mut up = node.parent.clone().filter(|parent| removed.contains(parent))?;
        let mut names = vec![node.display_name.clone()];
        let parent = loop {
            let Some(above) = self.nodes.get(&up) else {
                break None;
            };
            names.push(above.display_name.clone());
            match &above.parent {
                Some(next) if removed.contains(next) => up = next.clone(),
                other => break other.clone(),
            }
        };
        names.reverse();
        Some(Reattach {
            id: survivor.clone(),
            parent,
            display_name: names.join(DISPLAY_SEPARATOR),
        })
    }

    /// The slot `id` held before batch `batch` (or a later one) adopted it
    fn take_placement(&mut self, id: &ProjectId, batch: u64) -> Option<Placement> {
        let history = self.placements.get_mut(id)?;
        let first = history
            .iter()
            .position(|placement| placement.batch >= batch)?;
        let origin = history.remove(first);
        history.truncate(first);
        Some(origin)
    }

    /// Attach a kept node under its new parent. With the sibling `order` it
    /// was adopted from, it goes in front of the first sibling that came
    /// after it; otherwise it is appended.
    fn reattach(&mut self, reattach: Reattach, order: Option<&[ProjectId]>) {
        let Reattach {
            id,
            parent,
            display_name,
        } = reattach;
        let level = parent
            .as_ref()
            .and_then(|parent_id| self.nodes.get(parent_id))
            .map_or(1, |parent_node| parent_node.level + 1);
        let siblings = match parent.as_ref().and_then(|parent_id| self.nodes.get_mut(parent_id)) {
            Some(parent_node) => &mut parent_node.children,
            None => &mut self.roots,
        };
        let rank = |member: &ProjectId| order.and_then(|order| order.iter().position(|o| o == member));
        let at = match rank(&id) {
            Some(own) => siblings
                .iter()
                .position(|sibling| match rank(sibling) {
                    Some(other) => other > own,
                    None => true,
                })
                .unwrap_or(siblings.len()),
            None => siblings.len(),
        };
        siblings.insert(at, id.clone());

        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = parent;
            node.display_name = display_name;
        }
        self.relevel(&id, level);
    }

    /// Insert `id`, treating ids in `pending` as selected even before they are
    /// inserted. Returns the id of the (new or existing) node.
    fn insert_with(
        &mut self,
        tree: &ProjectTree,
        id: &str,
        pending: &HashSet<ProjectId>,
        batch: u64,
    ) -> Option<ProjectId> {
        if let Some(existing) = self.nodes.get(id) {
            return Some(existing.id.clone());
        }
        let project = tree.get(id)?;
        if project.is_root() {
            return None;
        }

        let mut parent: Option<ProjectId> = None;
        for ancestor in tree.ancestors(id) {
            if ancestor.is_root() {
                break;
            }
            if self.nodes.contains_key(&ancestor.id) {
                parent = Some(ancestor.id.clone());
                break;
            }
            if pending.contains(&ancestor.id) {
                parent = self.insert_with(tree, ancestor.id.as_str(), pending, batch);
                break;
            }
        }

        let level = parent
            .as_ref()
            .and_then(|parent_id| self.nodes.get(parent_id))
            .map_or(1, |parent_node| parent_node.level + 1);
        let node = SelectionNode {
            id: project.id.clone(),
            display_name: display_chain(tree, id, parent.as_ref()),
            level,
            parent: parent.clone(),
            children: Vec::new(),
        };

        match parent.as_ref().and_then(|parent_id| self.nodes.get_mut(parent_id)) {
            Some(parent_node) => parent_node.children.push(node.id.clone()),
            None => self.roots.push(node.id.clone()),
        }
        let new_id = node.id.clone();
        self.nodes.insert(new_id.clone(), node);
        self.batches.insert(new_id.clone(), batch);

        self.adopt_descendants(tree, &new_id, batch);
        Some(new_id)
    }

    /// Move siblings of `id` that descend from it in the project tree under
    /// `id`, so no selected project stays elided behind a selected ancestor.
    fn adopt_descendants(&mut self, tree: &ProjectTree, id: &ProjectId, batch: u64) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let parent = node.parent.clone();
        let level = node.level;
        let siblings = match &parent {
            Some(parent_id) => self
                .nodes
                .get(parent_id)
                .map(|parent_node| parent_node.children.clone())
                .unwrap_or_default(),
            None => self.roots.clone(),
        };

        let adopted: Vec<ProjectId> = siblings
            .iter()
            .filter(|sibling| *sibling != id)
            .filter(|sibling| {
                tree.ancestors(sibling.as_str())
                    .take_while(|ancestor| Some(&ancestor.id) != parent.as_ref())
                    .any(|ancestor| &ancestor.id == id)
            })
            .cloned()
            .collect();
        if adopted.is_empty() {
            return;
        }

        let batches = &self.batches;
        let order = self
            .snapshots
            .entry(parent.clone())
            .or_insert_with(|| {
                siblings
                    .into_iter()
                    .filter(|sibling| batches.get(sibling) != Some(&batch))
                    .collect()
            })
            .clone();
        for child in &adopted {
            self.placements.entry(child.clone()).or_default().push(Placement {
                batch,
                parent: parent.clone(),
                order: order.clone(),
            });
        }

        match &parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.nodes.get_mut(parent_id) {
                    parent_node.children.retain(|child| !adopted.contains(child));
                }
            }
            None => self.roots.retain(|root| !adopted.contains(root)),
        }
        for child in &adopted {
            let display_name = display_chain(tree, child.as_str(), Some(id));
            if let Some(child_node) = self.nodes.get_mut(child) {
                child_node.parent = Some(id.clone());
                child_node.display_name = display_name;
            }
            self.relevel(child, level + 1);
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.children.extend(adopted);
        }
    }

    fn relevel(&mut self, id: &ProjectId, level: usize) {
        let children = match self.nodes.get_mut(id) {
            Some(node) => {
                node.level = level;
                node.children.clone()
            }
            None => return,
        };
        for child in &children {
            self.relevel(child, level + 1);
        }
    }

    fn drop_subtree(&mut self, id: &str) {
        if let Some(node) = self.forget(id) {
            for child in &node.children {
                self.drop_subtree(child.as_str());
            }
        }
    }

    fn forget(&mut self, id: &str) -> Option<SelectionNode> {
        self.batches.remove(id);
        self.placements.remove(id);
        self.nodes.remove(id)
    }
}

/// Name of `id` prefixed with every ancestor name up to (excluding) `stop`
/// or the project root.
fn display_chain(tree: &ProjectTree, id: &str, stop: Option<&ProjectId>) -> String {
    let mut display = tree
        .get(id)
        .map(|project| project.name.clone())
        .unwrap_or_default();
    for ancestor in tree.ancestors(id) {
        if ancestor.is_root() || Some(&ancestor.id) == stop {
            break;
        }
        display = format!("{}{}{}", ancestor.name, DISPLAY_SEPARATOR, display);
    }
    display
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ProjectRecord;

    fn record(id: &str, parent: &str, name: &str) -> ProjectRecord {
        ProjectRecord::new(id, Some(parent), name)
    }

    /// root
    /// ├── A
    /// │   ├── B
    /// │   │   └── E
    /// │   └── C
    /// └── D
    fn sample_tree() -> ProjectTree {
        ProjectTree::build(vec![
            ProjectRecord::root("_Root", "<Root project>"),
            record("A", "_Root", "Alpha"),
            record("B", "A", "Beta"),
            record("E", "B", "Epsilon"),
            record("C", "A", "Gamma"),
            record("D", "_Root", "Delta"),
        ])
        .unwrap()
    }

    fn all_visible(tree: &ProjectTree) -> VisibleSet {
        tree.iter_preorder().map(|node| node.id.clone()).collect()
    }

    fn serialized(selection: &SelectionTree) -> Vec<String> {
        selection
            .serialize()
            .into_iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    #[test]
    fn select_includes_visible_descendants() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();

        assert!(selection.select(&tree, "A", &all_visible(&tree)));

        assert_eq!(serialized(&selection), vec!["A", "B", "E", "C"]);
        assert_eq!(selection.get("A").unwrap().level, 1);
        assert_eq!(selection.get("E").unwrap().level, 3);
        assert_eq!(selection.get("E").unwrap().display_name, "Epsilon");
    }

    #[test]
    fn select_skips_descendants_outside_visible_set() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        let visible: VisibleSet = ["_Root", "A", "C", "E"].into_iter().collect();

        assert!(selection.select(&tree, "A", &visible));

        // B is hidden, so its subtree is not reached even though E is visible.
        assert_eq!(serialized(&selection), vec!["A", "C"]);
    }

    #[test]
    fn select_is_noop_for_invisible_or_selected_ids() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        let visible: VisibleSet = ["_Root", "D"].into_iter().collect();

        assert!(!selection.select(&tree, "A", &visible));
        assert!(selection.is_empty());

        assert!(selection.select(&tree, "D", &visible));
        let before = selection.clone();
        assert!(!selection.select(&tree, "D", &visible));
        assert_eq!(selection, before);
    }

    #[test]
    fn select_ignores_root_and_unknown_ids() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        let mut visible = all_visible(&tree);
        visible.insert(ProjectId::from("ghost"));

        assert!(!selection.select(&tree, "_Root", &visible));
        assert!(!selection.select(&tree, "ghost", &visible));
        assert!(selection.is_empty());
    }

    #[test]
    fn deep_node_folds_unselected_ancestor_names() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();

        let node = selection.insert_node(&tree, "E").unwrap();

        assert_eq!(node.display_name, "Alpha → Beta → Epsilon");
        assert_eq!(node.level, 1);
        assert_eq!(node.parent, None);
    }

    #[test]
    fn insert_attaches_under_selected_ancestor() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();

        selection.insert_node(&tree, "A");
        let node = selection.insert_node(&tree, "E").unwrap();

        assert_eq!(node.display_name, "Beta → Epsilon");
        assert_eq!(node.level, 2);
        assert_eq!(node.parent, Some(ProjectId::from("A")));
    }

    #[test]
    fn insert_returns_existing_node() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        selection.insert_node(&tree, "B");
        selection.insert_node(&tree, "B");
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn inserting_ancestor_adopts_elided_descendants() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();

        selection.insert_node(&tree, "E");
        selection.insert_node(&tree, "D");
        selection.insert_node(&tree, "A");

        assert_eq!(serialized(&selection), vec!["D", "A", "E"]);
        let e = selection.get("E").unwrap();
        assert_eq!(e.parent, Some(ProjectId::from("A")));
        assert_eq!(e.display_name, "Beta → Epsilon");
        assert_eq!(e.level, 2);
    }

    #[test]
    fn unselect_round_trips_selection() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        selection.select(&tree, "D", &all_visible(&tree));
        let before = selection.serialize();

        selection.select(&tree, "A", &all_visible(&tree));
        assert!(selection.unselect("A"));

        assert_eq!(selection.serialize(), before);
        assert!(!selection.contains("E"));
    }

    #[test]
    fn unselect_keeps_descendant_selected_before_ancestor() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        selection.select(&tree, "E", &all_visible(&tree));
        let before = selection.clone();

        selection.select(&tree, "A", &all_visible(&tree));
        assert_eq!(selection.get("E").unwrap().parent, Some(ProjectId::from("B")));
        assert!(selection.unselect("A"));

        assert_eq!(serialized(&selection), vec!["E"]);
        let e = selection.get("E").unwrap();
        assert_eq!(e.display_name, "Alpha → Beta → Epsilon");
        assert_eq!(e.level, 1);
        assert_eq!(e.parent, None);
        assert_eq!(selection, before);
    }

    #[test]
    fn unselect_puts_adopted_nodes_back_in_place() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        selection.insert_node(&tree, "E");
        selection.insert_node(&tree, "D");
        selection.insert_node(&tree, "C");
        let before = selection.clone();

        selection.select(&tree, "A", &all_visible(&tree));
        assert_eq!(serialized(&selection), vec!["D", "A", "C", "B", "E"]);
        assert!(selection.unselect("A"));

        assert_eq!(serialized(&selection), vec!["E", "D", "C"]);
        assert_eq!(selection, before);
    }

    #[test]
    fn unselect_moves_kept_nodes_to_nearest_selected_ancestor() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        selection.insert_node(&tree, "E");
        selection.insert_node(&tree, "B");
        selection.insert_node(&tree, "A");
        assert_eq!(serialized(&selection), vec!["A", "B", "E"]);

        assert!(selection.unselect("B"));

        assert_eq!(serialized(&selection), vec!["A", "E"]);
        let e = selection.get("E").unwrap();
        assert_eq!(e.parent, Some(ProjectId::from("A")));
        assert_eq!(e.display_name, "Beta → Epsilon");
        assert_eq!(e.level, 2);
    }

    #[test]
    fn unselect_drops_later_selections_below_branch() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        selection.select(&tree, "A", &all_visible(&tree));
        selection.remove_node("E", false);
        selection.insert_node(&tree, "E");

        assert!(selection.unselect("A"));

        assert!(selection.is_empty());
    }

    #[test]
    fn unselect_keeps_parent_selected_on_its_own() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        let only_b: VisibleSet = ["_Root", "A", "B"].into_iter().collect();
        selection.select(&tree, "B", &only_b);
        let before = selection.clone();

        selection.select(&tree, "E", &all_visible(&tree));
        assert!(selection.unselect("E"));

        assert_eq!(serialized(&selection), vec!["B"]);
        assert_eq!(selection, before);
    }

    #[test]
    fn unselect_collapses_emptied_ancestors() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        selection.select(&tree, "B", &all_visible(&tree));
        assert_eq!(serialized(&selection), vec!["B", "E"]);

        assert!(selection.unselect("E"));

        assert!(selection.is_empty());
    }

    #[test]
    fn remove_node_without_collapse_keeps_parent() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        selection.select(&tree, "B", &all_visible(&tree));

        assert!(selection.remove_node("E", false));

        assert_eq!(serialized(&selection), vec!["B"]);
        assert!(!selection.get("B").unwrap().has_children());
    }

    #[test]
    fn unselect_unknown_id_is_noop() {
        let mut selection = SelectionTree::new();
        assert!(!selection.unselect("nope"));
    }

    #[test]
    fn reorder_swaps_with_neighbour() {
        let tree = sample_tree();
        let mut selection = SelectionTree::new();
        let visible = all_visible(&tree);
        selection.select(&tree, "A", &visible);
        selection.select(&tree, "D", &visible);

        assert!(!selection.reorder("A", ShiftDirection::Backward));
        assert!(!selection.reorder("D", ShiftDirection::Forward));

        assert!(selection.reorder("D", ShiftDirection::Backward));
        assert_eq!(serialized(&selection), vec!["D", "A", "B", "E", "C"]);

        assert!(selection.reorder("B", ShiftDirection::Forward));
        assert_eq!(serialized(&selection), vec!["D", "A", "C", "B", "E"]);
    }

    #[test]
    fn restore_rebuilds_persisted_order() {
        let tree = sample_tree();
        let selection = SelectionTree::restore(&tree, ["D", "A", "C", "B"]);
        assert_eq!(serialized(&selection), vec!["D", "A", "C", "B"]);
        assert_eq!(selection.get("B").unwrap().level, 2);
    }

    #[test]
    fn restore_inserts_later_listed_ancestor_first() {
        let tree = sample_tree();
        let selection = SelectionTree::restore(&tree, ["E", "A"]);

        assert_eq!(serialized(&selection), vec!["A", "E"]);
        assert_eq!(selection.get("E").unwrap().display_name, "Beta → Epsilon");
    }

    #[test]
    fn restore_drops_stale_ids() {
        let tree = sample_tree();
        let selection = SelectionTree::restore(&tree, ["deleted", "D"]);
        assert_eq!(serialized(&selection), vec!["D"]);
    }
}
