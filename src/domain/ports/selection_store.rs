//! SelectionStore port - persistence of the ordered selected-id list
//!
//! The selected ids are the only state a host keeps between reloads.

use crate::domain::value_objects::ProjectId;
use crate::error::ProjectsResult;

pub trait SelectionStore {
    /// Load persisted ids; an absent store yields an empty list
    fn load(&self) -> ProjectsResult<Vec<ProjectId>>;

    /// Replace the persisted ids
    fn save(&self, ids: &[ProjectId]) -> ProjectsResult<()>;
}
