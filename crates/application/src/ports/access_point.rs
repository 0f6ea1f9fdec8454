use async_trait::async_trait;
use captive_portal_domain::{AccessPointConfig, DomainError, NetworkInterface};

/// Brings up the wireless access point the portal is served on.
///
/// Called exactly once, before either responder starts. The returned
/// interface carries the address the DNS responder advertises.
#[async_trait]
pub trait AccessPoint: Send + Sync {
    async fn start(&self, config: &AccessPointConfig) -> Result<NetworkInterface, DomainError>;
}
