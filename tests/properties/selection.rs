//! Property tests for the selection tree.

use proptest::prelude::*;

use visible_projects::{compute_visible, ProjectTree, SelectionTree};

use crate::support::project_tree;

/// A tree plus a few non-root ids to act on
fn tree_and_picks() -> impl Strategy<Value = (ProjectTree, Vec<String>)> {
    project_tree().prop_flat_map(|tree| {
        let len = tree.len();
        let picks = proptest::collection::vec(0..len, 0..=6)
            .prop_map(|indices| indices.into_iter().map(|i| format!("p{i}")).collect());
        (Just(tree), picks)
    })
}

/// A tree, non-root ids forming a starting selection, and ids to act on
fn tree_selection_and_picks() -> impl Strategy<Value = (ProjectTree, Vec<String>, Vec<String>)> {
    project_tree()
        .prop_filter("needs a project below the root", |tree| tree.len() > 1)
        .prop_flat_map(|tree| {
            let len = tree.len();
            let ids = |indices: Vec<usize>| -> Vec<String> {
                indices.into_iter().map(|i| format!("p{i}")).collect()
            };
            let selected = proptest::collection::vec(1..len, 1..=6).prop_map(ids);
            let picks = proptest::collection::vec(1..len, 1..=6).prop_map(ids);
            (Just(tree), selected, picks)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Selecting a project and then unselecting it restores the
    /// selection it started from, including projects below it that were
    /// selected earlier.
    #[test]
    fn property_select_unselect_round_trip(
        (tree, selected, picks) in tree_selection_and_picks()
    ) {
        let visible = compute_visible(&tree, "", None, None).unwrap();
        let mut before = SelectionTree::new();
        for id in &selected {
            before.insert_node(&tree, id);
        }
        prop_assert!(!before.is_empty());

        for id in &picks {
            let mut selection = before.clone();
            if selection.select(&tree, id, &visible) {
                prop_assert!(selection.unselect(id));
                prop_assert_eq!(selection.serialize(), before.serialize());
                prop_assert_eq!(&selection, &before);
            }
        }
    }

    /// PROPERTY: Serializing and restoring a selection yields the same tree.
    #[test]
    fn property_serialize_restore_round_trip((tree, picks) in tree_and_picks()) {
        let visible = compute_visible(&tree, "", None, None).unwrap();
        let mut selection = SelectionTree::new();
        for id in &picks {
            selection.select(&tree, id, &visible);
        }

        let restored = SelectionTree::restore(&tree, selection.serialize());

        prop_assert_eq!(restored.serialize(), selection.serialize());
        prop_assert_eq!(restored, selection);
    }

    /// PROPERTY: A selected node's selection parent is its nearest selected
    /// project ancestor.
    #[test]
    fn property_parent_is_nearest_selected_ancestor((tree, picks) in tree_and_picks()) {
        let mut selection = SelectionTree::new();
        for id in &picks {
            selection.insert_node(&tree, id);
        }

        for node in selection.iter() {
            let nearest = tree
                .ancestors(node.id.as_str())
                .find(|ancestor| selection.contains(ancestor.id.as_str()))
                .map(|ancestor| ancestor.id.clone());
            prop_assert_eq!(node.parent.clone(), nearest);
        }
    }

    /// PROPERTY: Every selected project appears exactly once in the
    /// serialized order.
    #[test]
    fn property_serialize_lists_each_node_once((tree, picks) in tree_and_picks()) {
        let mut selection = SelectionTree::new();
        for id in &picks {
            selection.insert_node(&tree, id);
        }

        let ids = selection.serialize();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert_eq!(ids.len(), selection.len());
    }
}
