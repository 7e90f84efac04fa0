//! HTTP project source
//!
//! Blocking GET against the projects endpoint. Transport failures that never
//! produced a complete response, including a body that could not be read, are
//! answered with status 0.

use std::fmt::Display;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::domain::ports::{ProjectSource, SourceResponse};
use crate::error::{ProjectsError, ProjectsResult};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct HttpProjectSource {
    client: Client,
}

impl HttpProjectSource {
    pub fn new() -> ProjectsResult<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> ProjectsResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProjectsError::Io(std::io::Error::other(e.to_string())))?;
        Ok(Self { client })
    }
}

impl ProjectSource for HttpProjectSource {
    fn fetch(&self, url: &str) -> SourceResponse {
        let response = match self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url, error = %e, "projects request failed");
                let status = e.status().map_or(0, |status| status.as_u16());
                return SourceResponse::status(url, status);
            }
        };

        let status = response.status().as_u16();
        received(url, status, response.text())
    }
}

/// Turn a read body into a response. An unreadable body counts as a failed
/// transfer, whatever status came with the headers.
fn received<E: Display>(url: &str, status: u16, body: Result<String, E>) -> SourceResponse {
    match body {
        Ok(body) => {
            tracing::debug!(url, status, bytes = body.len(), "projects response received");
            SourceResponse {
                url: url.to_string(),
                status,
                body,
            }
        }
        Err(e) => {
            tracing::warn!(url, status, error = %e, "projects response body unreadable");
            SourceResponse::status(url, 0)
        }
    }
}
