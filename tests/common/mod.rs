//! Common test utilities for CLI scenario tests.
//!
//! - `TestEnv`: isolated working directory, HOME and config dir
//! - `PROJECTS_JSON`: a small projects payload

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// _Root
/// ├── Web
/// │   ├── Api
/// │   │   └── Gateway
/// │   └── Frontend
/// └── Tools
pub const PROJECTS_JSON: &str = r#"{
  "count": 6,
  "href": "/app/rest/projects",
  "project": [
    {"id": "_Root", "name": "<Root project>", "href": "/app/rest/projects/id:_Root"},
    {"id": "Web", "parentProjectId": "_Root", "name": "Web"},
    {"id": "Web_Api", "parentProjectId": "Web", "name": "Api"},
    {"id": "Web_Api_Gateway", "parentProjectId": "Web_Api", "name": "Gateway"},
    {"id": "Web_Frontend", "parentProjectId": "Web", "name": "Frontend"},
    {"id": "Tools", "parentProjectId": "_Root", "name": "Tools"}
  ]
}"#;

pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        fs::create_dir_all(env.home()).unwrap();
        env.write("projects.json", PROJECTS_JSON);
        env
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    /// Selected ids from the default state file
    pub fn state(&self) -> Vec<String> {
        serde_json::from_str(&self.read(".visible-projects-state.json")).unwrap()
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_visible-projects"))
            .current_dir(self.path())
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env_remove("RUST_LOG")
            .env_remove("VISIBLE_PROJECTS_URL")
            .env_remove("VISIBLE_PROJECTS_HIDE_SELECTED")
            .env_remove("VISIBLE_PROJECTS_TIMEOUT_SECS")
            .args(args)
            .output()
            .unwrap()
    }

    /// Run and assert success, returning stdout
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }
}
