//! Captive Portal Domain Layer
pub mod config;
pub mod dns_question;
pub mod errors;
pub mod network;

pub use config::{AccessPointConfig, AuthMode, CliOverrides, Config, ConfigError};
pub use dns_question::{DecodedQuery, DnsQuestion, Unanswerable};
pub use errors::DomainError;
pub use network::NetworkInterface;
