//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (VISIBLE_PROJECTS_*)
//! 3. Project config (./.visible-projects.toml)
//! 4. User config (<config dir>/visible-projects/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, FilterConfig, RenderConfig, SelectionConfig, SourceConfig};
