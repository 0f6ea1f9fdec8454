//! Captive Portal Infrastructure Layer
pub mod access_point;
pub mod dns;
pub mod http;
pub mod portal;
