//! Filter Domain Service
//!
//! Computes which projects stay visible under a text filter. Matching runs
//! against each node's lowercased full path; a match makes the node's whole
//! ancestor chain and its whole subtree visible.

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::domain::entities::{ProjectNode, ProjectTree};
use crate::domain::value_objects::{ProjectId, VisibleSet};
use crate::error::{ProjectsError, ProjectsResult};

/// Compiled filter text
///
/// Whitespace separates terms. A path matches when it contains every term,
/// case-insensitively, in the given left-to-right order. No terms means
/// everything matches.
#[derive(Debug, Clone)]
pub struct FilterPattern {
    regex: Option<Regex>,
}

impl FilterPattern {
    pub fn new(filter: &str) -> ProjectsResult<Self> {
        let terms: Vec<String> = filter.split_whitespace().map(regex::escape).collect();
        if terms.is_empty() {
            return Ok(Self::match_all());
        }

        let regex = RegexBuilder::new(&terms.join(".*"))
            .case_insensitive(true)
            .build()
            .map_err(|e| ProjectsError::InvalidFilter {
                filter: filter.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { regex: Some(regex) })
    }

    pub fn match_all() -> Self {
        Self { regex: None }
    }

    pub fn is_match_all(&self) -> bool {
        self.regex.is_none()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.as_ref().map_or(true, |regex| regex.is_match(path))
    }

    pub fn matches(&self, node: &ProjectNode) -> bool {
        self.is_match(&node.full_path)
    }
}

/// Whether `node` matches `filter`
pub fn matches(node: &ProjectNode, filter: &str) -> ProjectsResult<bool> {
    Ok(FilterPattern::new(filter)?.matches(node))
}

/// Whether `next` only narrows what `previous` matched, making a progressive
/// recomputation over the previous result exact.
pub fn is_refinement(previous: &str, next: &str) -> bool {
    !previous.trim().is_empty() && next.starts_with(previous)
}

/// Compute the visible ids of `tree` under `filter`.
///
/// The root is always visible. Nodes in `excluded` are skipped together with
/// their subtrees, as are nodes missing from `prior` (progressive mode). An
/// empty filter ignores `prior` and hides only the `excluded` ids themselves.
pub fn compute_visible(
    tree: &ProjectTree,
    filter: &str,
    prior: Option<&VisibleSet>,
    excluded: Option<&HashSet<ProjectId>>,
) -> ProjectsResult<VisibleSet> {
    let pattern = FilterPattern::new(filter)?;
    let is_excluded = |node: &ProjectNode| excluded.is_some_and(|ids| ids.contains(&node.id));

    if pattern.is_match_all() {
        let visible: VisibleSet = tree
            .iter_preorder()
            .filter(|node| node.is_root() || !is_excluded(node))
            .map(|node| node.id.clone())
            .collect();
        tracing::debug!(visible = visible.len(), total = tree.len(), "filter cleared");
        return Ok(visible);
    }

    let root = tree.root();
    let mut visible = VisibleSet::with_capacity(prior.map_or(tree.len(), VisibleSet::len));
    visible.insert(root.id.clone());

    // (node, inside a matched subtree)
    let mut stack: Vec<(&ProjectNode, bool)> = children_rev(tree, root)
        .map(|child| (child, false))
        .collect();

    while let Some((node, show_all)) = stack.pop() {
        if is_excluded(node) || prior.is_some_and(|ids| !ids.contains(node.id.as_str())) {
            continue;
        }

        let matched = show_all || pattern.matches(node);
        if matched {
            if !show_all {
                for ancestor in tree.ancestors(node.id.as_str()) {
                    if !visible.insert(ancestor.id.clone()) {
                        break;
                    }
                }
            }
            visible.insert(node.id.clone());
        }

        stack.extend(children_rev(tree, node).map(|child| (child, matched)));
    }

    tracing::debug!(
        filter,
        progressive = prior.is_some(),
        visible = visible.len(),
        total = tree.len(),
        "visible projects computed"
    );
    Ok(visible)
}

fn children_rev<'a>(
    tree: &'a ProjectTree,
    node: &'a ProjectNode,
) -> impl Iterator<Item = &'a ProjectNode> + 'a {
    node.children
        .iter()
        .rev()
        .filter_map(|child| tree.get(child.as_str()))
}
