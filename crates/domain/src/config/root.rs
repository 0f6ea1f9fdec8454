use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

use super::access_point::{AccessPointConfig, MAX_SSID_LEN};
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::portal::PortalConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "captive-portal.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/captive-portal/config.toml";

/// Smallest receive buffer that still holds a classic 512-byte DNS message.
const MIN_RECV_BUFFER_SIZE: usize = 512;

/// Main configuration structure for the captive portal
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening ports and bind address
    #[serde(default)]
    pub server: ServerConfig,

    /// Wireless access point identity and addressing
    #[serde(default)]
    pub access_point: AccessPointConfig,

    /// DNS responder tuning
    #[serde(default)]
    pub dns: DnsConfig,

    /// Portal page content
    #[serde(default)]
    pub portal: PortalConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. captive-portal.toml in current directory
    /// 3. /etc/captive-portal/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(ssid) = overrides.ssid {
            self.access_point.ssid = ssid;
        }
        if let Some(address) = overrides.address {
            self.access_point.address = address;
        }
        if let Some(page) = overrides.page_path {
            self.portal.page_path = Some(page);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }
        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid bind address '{}'",
                self.server.bind_address
            )));
        }

        let ap = &self.access_point;
        if ap.ssid.is_empty() {
            return Err(ConfigError::Validation("SSID cannot be empty".to_string()));
        }
        if ap.ssid.len() > MAX_SSID_LEN {
            return Err(ConfigError::Validation(format!(
                "SSID is {} bytes, at most {} allowed",
                ap.ssid.len(),
                MAX_SSID_LEN
            )));
        }
        if ap.address.is_unspecified() || ap.address.is_broadcast() {
            return Err(ConfigError::Validation(format!(
                "Access point address {} cannot be advertised",
                ap.address
            )));
        }
        if !is_prefix_mask(ap.subnet_mask) {
            return Err(ConfigError::Validation(format!(
                "Subnet mask {} is not a contiguous prefix",
                ap.subnet_mask
            )));
        }

        if self.dns.recv_buffer_size < MIN_RECV_BUFFER_SIZE {
            return Err(ConfigError::Validation(format!(
                "DNS receive buffer must be at least {} bytes",
                MIN_RECV_BUFFER_SIZE
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

fn is_prefix_mask(mask: Ipv4Addr) -> bool {
    let bits = u32::from(mask);
    bits != 0 && bits.leading_ones() + bits.trailing_zeros() == 32
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub ssid: Option<String>,
    pub address: Option<Ipv4Addr>,
    pub page_path: Option<String>,
    pub log_level: Option<String>,
}
