use captive_portal_application::ports::{AccessPoint, PageSource};
use captive_portal_domain::Config;
use captive_portal_infrastructure::access_point::HostAccessPoint;
use captive_portal_infrastructure::portal::{EmbeddedPage, FilePageSource};
use std::sync::Arc;

pub struct Adapters {
    pub access_point: Arc<dyn AccessPoint>,
    pub page_source: Arc<dyn PageSource>,
}

impl Adapters {
    pub fn new(config: &Config) -> Self {
        let page_source: Arc<dyn PageSource> = match &config.portal.page_path {
            Some(path) => Arc::new(FilePageSource::new(path)),
            None => Arc::new(EmbeddedPage),
        };

        Self {
            access_point: Arc::new(HostAccessPoint::new()),
            page_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_page_by_default() {
        let adapters = Adapters::new(&Config::default());
        assert_eq!(adapters.page_source.describe(), "embedded");
    }

    #[test]
    fn test_configured_page_path() {
        let mut config = Config::default();
        config.portal.page_path = Some("/srv/portal/index.html".to_string());

        let adapters = Adapters::new(&config);
        assert_eq!(adapters.page_source.describe(), "/srv/portal/index.html");
    }
}
