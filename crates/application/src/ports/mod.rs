mod access_point;
mod page_source;

pub use access_point::AccessPoint;
pub use page_source::PageSource;

// Re-export for convenience
pub use captive_portal_domain::{AccessPointConfig, NetworkInterface};
