use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use crate::network::NetworkInterface;

/// Longest SSID an 802.11 beacon can carry.
pub const MAX_SSID_LEN: usize = 32;

/// Authentication offered by the access point.
///
/// Only open networks are supported: phones refuse to run captive-portal
/// detection before the user has joined, so the portal must be reachable
/// without credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Open,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessPointConfig {
    #[serde(default = "default_ssid")]
    pub ssid: String,

    /// Address of the device itself; every DNS answer points here.
    #[serde(default = "default_address")]
    pub address: Ipv4Addr,

    #[serde(default = "default_subnet_mask")]
    pub subnet_mask: Ipv4Addr,

    #[serde(default)]
    pub auth_mode: AuthMode,
}

impl AccessPointConfig {
    /// Interface addressing advertised to DHCP peers. The device is its own
    /// gateway and its own resolver.
    pub fn interface(&self) -> NetworkInterface {
        NetworkInterface {
            address: self.address,
            subnet_mask: self.subnet_mask,
            gateway: self.address,
            dns: self.address,
        }
    }
}

impl Default for AccessPointConfig {
    fn default() -> Self {
        Self {
            ssid: default_ssid(),
            address: default_address(),
            subnet_mask: default_subnet_mask(),
            auth_mode: AuthMode::default(),
        }
    }
}

fn default_ssid() -> String {
    "myssid".to_string()
}

fn default_address() -> Ipv4Addr {
    Ipv4Addr::new(10, 0, 0, 1)
}

fn default_subnet_mask() -> Ipv4Addr {
    Ipv4Addr::new(255, 255, 255, 0)
}
