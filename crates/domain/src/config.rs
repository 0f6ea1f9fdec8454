pub mod access_point;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod portal;
pub mod root;
pub mod server;

pub use access_point::{AccessPointConfig, AuthMode, MAX_SSID_LEN};
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use portal::PortalConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
