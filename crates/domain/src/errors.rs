use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Truncated DNS message: needed {needed} bytes, got {len}")]
    TruncatedMessage { needed: usize, len: usize },

    #[error("Compression pointer in question name at offset {offset}")]
    CompressedLabel { offset: usize },

    #[error("Label at offset {offset} is not valid UTF-8")]
    InvalidLabelEncoding { offset: usize },

    #[error("Access point error: {0}")]
    AccessPoint(String),

    #[error("Portal page unavailable: {0}")]
    PageUnavailable(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}
