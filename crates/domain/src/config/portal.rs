use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortalConfig {
    /// HTML file served as the portal page. The compiled-in page is used
    /// when unset.
    #[serde(default)]
    pub page_path: Option<String>,
}
