//! Visible Set Value Object
//!
//! The ids currently shown in the available-projects list. Recomputed on every
//! filter change and optionally fed back in as the prior set of a progressive
//! recomputation.

use std::collections::HashSet;

use super::ProjectId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet(HashSet<ProjectId>);

impl VisibleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashSet::with_capacity(capacity))
    }

    /// Insert an id, returning `false` if it was already visible
    pub fn insert(&mut self, id: ProjectId) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectId> {
        self.0.iter()
    }

    pub fn as_set(&self) -> &HashSet<ProjectId> {
        &self.0
    }
}

impl FromIterator<ProjectId> for VisibleSet {
    fn from_iter<I: IntoIterator<Item = ProjectId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for VisibleSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(ProjectId::from).collect())
    }
}
