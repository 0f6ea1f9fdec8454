use async_trait::async_trait;
use captive_portal_application::ports::AccessPoint;
use captive_portal_domain::{AccessPointConfig, DomainError, NetworkInterface};
use std::net::{SocketAddr, UdpSocket};
use tracing::{debug, info};

/// Access point whose radio is managed by the host system.
///
/// The wireless interface itself (SSID, open authentication, DHCP) is set up
/// by the platform's AP daemon. This adapter checks that the configured
/// address is really held by a local interface, since every DNS answer
/// points at it, and reports the addressing the portal advertises.
#[derive(Debug, Default)]
pub struct HostAccessPoint;

impl HostAccessPoint {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AccessPoint for HostAccessPoint {
    async fn start(&self, config: &AccessPointConfig) -> Result<NetworkInterface, DomainError> {
        info!(
            ssid = %config.ssid,
            auth_mode = ?config.auth_mode,
            address = %config.address,
            "Activating access point"
        );

        // Binding an ephemeral port only succeeds for a local address.
        let bound = UdpSocket::bind(SocketAddr::from((config.address, 0))).map_err(|e| {
            DomainError::AccessPoint(format!(
                "address {} is not assigned to any interface: {}",
                config.address, e
            ))
        })?;
        debug!(bound = ?bound.local_addr().ok(), "Access point address is local");

        Ok(config.interface())
    }
}
