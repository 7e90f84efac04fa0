//! Random project tree generation shared by the property tests.

use proptest::prelude::*;

use visible_projects::{ProjectRecord, ProjectTree};

const NAMES: &[&str] = &[
    "Web", "Api", "Core", "Tools", "Docs", "Mobile", "Infra", "Ci", "Data", "Ops",
];

/// A tree of 1..=24 projects. Record `i` (i > 0) hangs under a random earlier
/// record, so the input is always parent-ordered.
pub fn project_tree() -> impl Strategy<Value = ProjectTree> {
    (1usize..=24)
        .prop_flat_map(|len| {
            let parents: Vec<_> = (1..len).map(|i| 0..i).collect();
            let names = proptest::collection::vec(0..NAMES.len(), len);
            (parents, names)
        })
        .prop_map(|(parents, names)| {
            let mut records = vec![ProjectRecord::root("p0", "<Root project>")];
            for (offset, parent) in parents.into_iter().enumerate() {
                let i = offset + 1;
                let id = format!("p{i}");
                let parent_id = format!("p{parent}");
                records.push(ProjectRecord::new(id, Some(parent_id.as_str()), NAMES[names[i]]));
            }
            ProjectTree::build(records).expect("generated records are parent-ordered")
        })
}

/// Filter text built from project names and fragments, sometimes blank
pub fn filter_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            (0..NAMES.len()).prop_map(|i| NAMES[i].to_lowercase()),
            "[a-z]{1,3}",
            Just("::".to_string()),
        ],
        0..=3,
    )
    .prop_map(|terms| terms.join(" "))
}
