//! In-memory project source
//!
//! Answers every request with the same status and body. Used by tests and by
//! hosts that already hold the payload.

use std::cell::Cell;

use crate::domain::ports::{ProjectSource, SourceResponse};

#[derive(Debug, Clone)]
pub struct StaticProjectSource {
    status: u16,
    body: String,
    requests: Cell<usize>,
}

impl StaticProjectSource {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Cell::new(0),
        }
    }

    /// Number of fetches served so far
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl ProjectSource for StaticProjectSource {
    fn fetch(&self, url: &str) -> SourceResponse {
        self.requests.set(self.requests.get() + 1);
        SourceResponse {
            url: url.to_string(),
            status: self.status,
            body: self.body.clone(),
        }
    }
}
