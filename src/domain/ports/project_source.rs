//! ProjectSource port - where raw project payloads come from
//!
//! A source answers every request with a response, mirroring an HTTP exchange:
//! a connection that never produced a response is reported as status 0.

/// Outcome of one fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceResponse {
    /// Location actually requested
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl SourceResponse {
    pub fn ok(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self {
            url: url.into(),
            status,
            body: String::new(),
        }
    }

    /// 2xx statuses are successful
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstract project source
///
/// Implementations:
/// - `HttpProjectSource` - blocking HTTP GET
/// - `FileProjectSource` - local JSON file
/// - `StaticProjectSource` - fixed in-memory response
pub trait ProjectSource {
    fn fetch(&self, url: &str) -> SourceResponse;
}

impl<S: ProjectSource + ?Sized> ProjectSource for Box<S> {
    fn fetch(&self, url: &str) -> SourceResponse {
        (**self).fetch(url)
    }
}

impl<S: ProjectSource + ?Sized> ProjectSource for &S {
    fn fetch(&self, url: &str) -> SourceResponse {
        (**self).fetch(url)
    }
}
