//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ProjectsError, ProjectsResult};

use super::types::Config;

/// Project config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".visible-projects.toml";

const ENV_URL: &str = "VISIBLE_PROJECTS_URL";
const ENV_HIDE_SELECTED: &str = "VISIBLE_PROJECTS_HIDE_SELECTED";
const ENV_TIMEOUT_SECS: &str = "VISIBLE_PROJECTS_TIMEOUT_SECS";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ProjectsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ProjectsError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match Config::load(&path) {
            Ok(config) => {
                tracing::debug!(file = %path.display(), "configuration loaded");
                return with_env_overrides(config);
            }
            Err(err) => tracing::warn!(file = %path.display(), %err, "ignoring configuration"),
        }
    }

    with_env_overrides(Config::default())
}

/// User-level config file under the platform config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("visible-projects").join("config.toml"))
}

/// Apply environment variable overrides (VISIBLE_PROJECTS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // VISIBLE_PROJECTS_URL
    if let Some(url) = var(ENV_URL).filter(|url| !url.trim().is_empty()) {
        config.source.url = Some(url);
    }

    // VISIBLE_PROJECTS_HIDE_SELECTED
    if let Some(val) = var(ENV_HIDE_SELECTED) {
        config.selection.hide_selected = val.to_lowercase() != "false" && val != "0";
    }

    // VISIBLE_PROJECTS_TIMEOUT_SECS
    if let Some(val) = var(ENV_TIMEOUT_SECS) {
        match val.trim().parse() {
            Ok(secs) => config.source.timeout_secs = secs,
            Err(_) => tracing::warn!(value = %val, "ignoring invalid {ENV_TIMEOUT_SECS}"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "url",
        "timeout_secs",
        "filter",
        "auto_progressive",
        "selection",
        "hide_selected",
        "state_file",
        "render",
        "template",
        "escape_html",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn apply_overrides_for_test(
    config: Config,
    vars: &[(&str, &str)],
) -> Config {
    apply_overrides(config, |key| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.to_string())
    })
}
