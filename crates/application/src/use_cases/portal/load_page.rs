use crate::ports::PageSource;
use bytes::Bytes;
use captive_portal_domain::DomainError;
use std::sync::Arc;
use tracing::{info, warn};

pub struct LoadPortalPageUseCase {
    source: Arc<dyn PageSource>,
}

impl LoadPortalPageUseCase {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self) -> Result<Bytes, DomainError> {
        let body = self.source.load()?;

        if body.is_empty() {
            warn!(source = %self.source.describe(), "Portal page is empty");
        }
        info!(
            source = %self.source.describe(),
            bytes = body.len(),
            "Portal page loaded"
        );

        Ok(body)
    }
}
