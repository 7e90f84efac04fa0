//! JSON selection store
//!
//! Persists the ordered selected ids as a JSON array. Writes go through a
//! temporary file in the same directory and are renamed into place.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::SelectionStore;
use crate::domain::value_objects::ProjectId;
use crate::error::ProjectsResult;

/// Default state file name, relative to the working directory
pub const DEFAULT_STATE_FILE: &str = ".visible-projects-state.json";

#[derive(Debug, Clone)]
pub struct JsonSelectionStore {
    path: PathBuf,
}

impl JsonSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for JsonSelectionStore {
    fn load(&self) -> ProjectsResult<Vec<ProjectId>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, ids: &[ProjectId]) -> ProjectsResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let mut file = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut file, ids)?;
        writeln!(file)?;
        file.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(path = %self.path.display(), selected = ids.len(), "selection saved");
        Ok(())
    }
}
