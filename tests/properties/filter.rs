//! Property tests for visibility filtering.

use proptest::prelude::*;

use visible_projects::{compute_visible, FilterPattern, ProjectTree, VisibleSet};

use crate::support::{filter_text, project_tree};

fn all_ids(tree: &ProjectTree) -> VisibleSet {
    tree.iter_preorder().map(|node| node.id.clone()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An empty filter shows every project, root included.
    #[test]
    fn property_empty_filter_shows_everything(tree in project_tree()) {
        let visible = compute_visible(&tree, "", None, None).unwrap();
        prop_assert_eq!(visible, all_ids(&tree));
    }

    /// PROPERTY: The root is always visible.
    #[test]
    fn property_root_always_visible(tree in project_tree(), filter in filter_text()) {
        let visible = compute_visible(&tree, &filter, None, None).unwrap();
        prop_assert!(visible.contains(tree.root_id().as_str()));
    }

    /// PROPERTY: Visibility is closed upwards: a visible node's parent is visible.
    #[test]
    fn property_visible_ancestors(tree in project_tree(), filter in filter_text()) {
        let visible = compute_visible(&tree, &filter, None, None).unwrap();
        for id in visible.iter() {
            if let Some(parent) = tree.parent_of(id.as_str()) {
                prop_assert!(visible.contains(parent.id.as_str()), "parent of {} hidden", id);
            }
        }
    }

    /// PROPERTY: Every descendant of a matching node is visible.
    #[test]
    fn property_matches_show_subtree(tree in project_tree(), filter in filter_text()) {
        let pattern = FilterPattern::new(&filter).unwrap();
        let visible = compute_visible(&tree, &filter, None, None).unwrap();
        for node in tree.iter_preorder().filter(|node| !node.is_root() && pattern.matches(node)) {
            for descendant in tree.preorder_from(node.id.as_str()) {
                prop_assert!(visible.contains(descendant.id.as_str()));
            }
        }
    }

    /// PROPERTY: Narrowing progressively from a prefix filter gives the same
    /// result as a full recompute.
    #[test]
    fn property_progressive_refinement_is_exact(
        tree in project_tree(),
        base in filter_text(),
        extra in "[a-z ]{0,4}",
    ) {
        prop_assume!(!base.trim().is_empty());
        let refined = format!("{base}{extra}");

        let prior = compute_visible(&tree, &base, None, None).unwrap();
        let progressive = compute_visible(&tree, &refined, Some(&prior), None).unwrap();
        let full = compute_visible(&tree, &refined, None, None).unwrap();

        prop_assert_eq!(progressive, full);
    }

    /// PROPERTY: Progressive mode never shows a node absent from the prior set
    /// (the root aside).
    #[test]
    fn property_progressive_only_narrows(
        tree in project_tree(),
        first in filter_text(),
        second in filter_text(),
    ) {
        prop_assume!(!second.trim().is_empty());
        let prior = compute_visible(&tree, &first, None, None).unwrap();
        let next = compute_visible(&tree, &second, Some(&prior), None).unwrap();
        for id in next.iter() {
            prop_assert!(id == tree.root_id() || prior.contains(id.as_str()));
        }
    }

    /// PROPERTY: Arbitrary filter text never panics and compiles.
    #[test]
    fn property_arbitrary_filter_never_panics(tree in project_tree(), filter in "(?s).{0,64}") {
        let _ = compute_visible(&tree, &filter, None, None);
    }
}
