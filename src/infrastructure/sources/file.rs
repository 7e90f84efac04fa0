//! Local file project source
//!
//! Reads a saved projects payload from disk. File errors are translated to the
//! HTTP status a server would have answered with.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::ports::{ProjectSource, SourceResponse};

const FILE_SCHEME: &str = "file://";

#[derive(Debug, Clone, Default)]
pub struct FileProjectSource {
    base: Option<PathBuf>,
}

impl FileProjectSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative locations against `base`
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn resolve(&self, location: &str) -> PathBuf {
        let path = Path::new(location.strip_prefix(FILE_SCHEME).unwrap_or(location));
        match &self.base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ProjectSource for FileProjectSource {
    fn fetch(&self, url: &str) -> SourceResponse {
        let path = self.resolve(url);
        match std::fs::read_to_string(&path) {
            Ok(body) => SourceResponse::ok(url, body),
            Err(e) => {
                let status = match e.kind() {
                    ErrorKind::NotFound => 404,
                    ErrorKind::PermissionDenied => 403,
                    _ => 500,
                };
                tracing::warn!(path = %path.display(), error = %e, status, "projects file unreadable");
                SourceResponse::status(url, status)
            }
        }
    }
}
