//! Command handlers for the CLI binary

pub mod picker;
pub mod selected;

use std::path::Path;

use anyhow::{Context, Result};

use visible_projects::config::Config;

/// Load `--config` when given (unknown keys become warnings), otherwise the
/// project/user hierarchy
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        let cwd = std::env::current_dir()?;
        return Ok(Config::load_or_default(Some(&cwd)));
    };

    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    for warning in &warnings {
        match &warning.suggestion {
            Some(suggestion) => tracing::warn!(
                file = %warning.file.display(),
                line = ?warning.line,
                "unknown config key '{}' (did you mean '{suggestion}'?)",
                warning.key
            ),
            None => tracing::warn!(
                file = %warning.file.display(),
                line = ?warning.line,
                "unknown config key '{}'",
                warning.key
            ),
        }
    }
    Ok(config.with_env_overrides())
}
