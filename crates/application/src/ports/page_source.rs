use bytes::Bytes;
use captive_portal_domain::DomainError;

/// Stored body of the portal page, copied verbatim into every response.
pub trait PageSource: Send + Sync {
    fn load(&self) -> Result<Bytes, DomainError>;

    /// Where the page comes from, for log output.
    fn describe(&self) -> String;
}
