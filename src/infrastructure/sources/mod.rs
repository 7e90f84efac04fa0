//! Project source implementations
//!
//! - `HttpProjectSource` - projects endpoint over HTTP(S)
//! - `FileProjectSource` - saved payload on local disk
//! - `StaticProjectSource` - fixed response held in memory

mod file;
mod http;
mod memory;

use std::time::Duration;

pub use file::FileProjectSource;
pub use http::{HttpProjectSource, DEFAULT_TIMEOUT};
pub use memory::StaticProjectSource;

use crate::domain::ports::ProjectSource;
use crate::error::ProjectsResult;

/// Whether `location` should be fetched over the network
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Pick a source for `location`: HTTP for `http(s)://` URLs, file otherwise
pub fn source_for(location: &str, timeout: Duration) -> ProjectsResult<Box<dyn ProjectSource>> {
    if is_remote(location) {
        Ok(Box::new(HttpProjectSource::with_timeout(timeout)?))
    } else {
        Ok(Box::new(FileProjectSource::new()))
    }
}
