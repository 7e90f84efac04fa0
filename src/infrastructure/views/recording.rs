//! Recording view
//!
//! Keeps every hook call in memory so hosts and tests can inspect what the
//! controller asked to render.

use std::sync::Mutex;

use crate::domain::ports::{ProjectItem, ProjectsView};

/// A single recorded hook call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Loading(bool),
    Projects {
        available: Vec<ProjectItem>,
        selected: Vec<ProjectItem>,
    },
    Error(String),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    calls: Mutex<Vec<ViewCall>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// The most recent `show_projects` call
    pub fn last_projects(&self) -> Option<(Vec<ProjectItem>, Vec<ProjectItem>)> {
        self.calls().into_iter().rev().find_map(|call| match call {
            ViewCall::Projects {
                available,
                selected,
            } => Some((available, selected)),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ViewCall::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }

    fn record(&self, call: ViewCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl ProjectsView for RecordingView {
    fn set_loading(&self, loading: bool) {
        self.record(ViewCall::Loading(loading));
    }

    fn show_projects(&self, available: &[ProjectItem], selected: &[ProjectItem]) {
        self.record(ViewCall::Projects {
            available: available.to_vec(),
            selected: selected.to_vec(),
        });
    }

    fn show_error(&self, message: &str) {
        self.record(ViewCall::Error(message.to_string()));
    }
}
