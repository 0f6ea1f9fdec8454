use crate::ports::AccessPoint;
use captive_portal_domain::config::MAX_SSID_LEN;
use captive_portal_domain::{AccessPointConfig, DomainError, NetworkInterface};
use std::sync::Arc;
use tracing::info;

pub struct StartAccessPointUseCase {
    access_point: Arc<dyn AccessPoint>,
}

impl StartAccessPointUseCase {
    pub fn new(access_point: Arc<dyn AccessPoint>) -> Self {
        Self { access_point }
    }

    pub async fn execute(&self, config: &AccessPointConfig) -> Result<NetworkInterface, DomainError> {
        if config.ssid.is_empty() || config.ssid.len() > MAX_SSID_LEN {
            return Err(DomainError::AccessPoint(format!(
                "SSID must be 1 to {} bytes, got {}",
                MAX_SSID_LEN,
                config.ssid.len()
            )));
        }

        let iface = self.access_point.start(config).await?;

        if iface.address != config.address {
            return Err(DomainError::AccessPoint(format!(
                "interface came up as {} instead of {}",
                iface.address, config.address
            )));
        }

        info!(ssid = %config.ssid, "Network config: {}", iface);
        Ok(iface)
    }
}
