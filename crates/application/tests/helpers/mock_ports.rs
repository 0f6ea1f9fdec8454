use async_trait::async_trait;
use bytes::Bytes;
use captive_portal_application::ports::{AccessPoint, PageSource};
use captive_portal_domain::{AccessPointConfig, DomainError, NetworkInterface};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct MockAccessPoint {
    starts: AtomicUsize,
    override_address: Option<Ipv4Addr>,
    error: Option<DomainError>,
    last_ssid: Mutex<Option<String>>,
}

impl MockAccessPoint {
    pub fn new() -> Self {
        Self {
            starts: AtomicUsize::new(0),
            override_address: None,
            error: None,
            last_ssid: Mutex::new(None),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            error: Some(error),
            ..Self::new()
        }
    }

    pub fn reporting_address(address: Ipv4Addr) -> Self {
        Self {
            override_address: Some(address),
            ..Self::new()
        }
    }

    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn last_ssid(&self) -> Option<String> {
        self.last_ssid.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccessPoint for MockAccessPoint {
    async fn start(&self, config: &AccessPointConfig) -> Result<NetworkInterface, DomainError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        *self.last_ssid.lock().unwrap() = Some(config.ssid.clone());

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let mut iface = config.interface();
        if let Some(address) = self.override_address {
            iface.address = address;
        }
        Ok(iface)
    }
}

pub struct MockPageSource {
    body: Result<Bytes, DomainError>,
}

impl MockPageSource {
    pub fn with_body(body: &'static str) -> Self {
        Self {
            body: Ok(Bytes::from_static(body.as_bytes())),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            body: Err(DomainError::PageUnavailable(reason.to_string())),
        }
    }
}

impl PageSource for MockPageSource {
    fn load(&self) -> Result<Bytes, DomainError> {
        self.body.clone()
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
