use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Pause after any responder error before reading the next datagram.
    #[serde(default = "default_error_backoff_ms")]
    pub error_backoff_ms: u64,

    #[serde(default = "default_recv_buffer_size")]
    pub recv_buffer_size: usize,
}

impl DnsConfig {
    pub fn error_backoff(&self) -> Duration {
        Duration::from_millis(self.error_backoff_ms)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            error_backoff_ms: default_error_backoff_ms(),
            recv_buffer_size: default_recv_buffer_size(),
        }
    }
}

fn default_error_backoff_ms() -> u64 {
    3000
}

fn default_recv_buffer_size() -> usize {
    4096
}
