mod host;

pub use host::HostAccessPoint;
