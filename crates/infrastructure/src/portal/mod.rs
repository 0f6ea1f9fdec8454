//! Sources for the portal page body.

use bytes::Bytes;
use captive_portal_application::ports::PageSource;
use captive_portal_domain::DomainError;
use std::path::PathBuf;

const DEFAULT_PAGE: &[u8] = include_bytes!("../../static/index.html");

/// Page stored on disk, read once when loaded.
#[derive(Debug, Clone)]
pub struct FilePageSource {
    path: PathBuf,
}

impl FilePageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for FilePageSource {
    fn load(&self) -> Result<Bytes, DomainError> {
        std::fs::read(&self.path).map(Bytes::from).map_err(|e| {
            DomainError::PageUnavailable(format!("{}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Page compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedPage;

impl PageSource for EmbeddedPage {
    fn load(&self) -> Result<Bytes, DomainError> {
        Ok(Bytes::from_static(DEFAULT_PAGE))
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}
