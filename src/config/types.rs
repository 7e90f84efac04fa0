//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ProjectsResult;
use crate::infrastructure::store::DEFAULT_STATE_FILE;
use crate::infrastructure::views::DEFAULT_TEMPLATE;

use super::loader::{self, ConfigWarning};

/// Where projects are loaded from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// `http(s)://` URL or local JSON file
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Narrow the previous result instead of recomputing when the new filter
    /// extends the old one
    #[serde(default = "default_true")]
    pub auto_progressive: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            auto_progressive: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectionConfig {
    /// Leave selected projects out of the available list
    #[serde(default)]
    pub hide_selected: bool,

    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_template")]
    pub template: String,

    /// HTML-escape substituted values
    #[serde(default = "default_true")]
    pub escape_html: bool,

    /// Use `→` in folded names; ASCII `->` otherwise
    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            escape_html: true,
            unicode: true,
        }
    }
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ProjectsResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ProjectsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (VISIBLE_PROJECTS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_secs)
    }

    /// Selection state file, falling back to the default name in the
    /// working directory
    pub fn state_file(&self) -> PathBuf {
        self.selection
            .state_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE))
    }
}
