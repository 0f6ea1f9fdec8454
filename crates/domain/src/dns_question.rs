use crate::DomainError;

/// A standard query the portal answers.
///
/// `domain_name` is never empty: anything that would produce an empty name
/// decodes to [`DecodedQuery::Unanswerable`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    transaction_id: u16,
    domain_name: String,
    raw_question: Vec<u8>,
}

impl DnsQuestion {
    /// `raw_question` holds the question section exactly as received: the
    /// label chain, its zero terminator, then QTYPE and QCLASS.
    pub fn new(
        transaction_id: u16,
        domain_name: String,
        raw_question: Vec<u8>,
    ) -> Result<Self, DomainError> {
        if domain_name.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "answerable question needs a name".to_string(),
            ));
        }
        Ok(Self {
            transaction_id,
            domain_name,
            raw_question,
        })
    }

    pub fn transaction_id(&self) -> u16 {
        self.transaction_id
    }

    /// Dot-terminated name, e.g. `captive.example.`
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub fn raw_question(&self) -> &[u8] {
        &self.raw_question
    }
}

/// Why a datagram gets no reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unanswerable {
    /// Opcode other than QUERY (0).
    NonStandardOpcode(u8),
    /// QDCOUNT is zero.
    NoQuestion,
    /// The question asks for the root name.
    RootName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedQuery {
    Answerable(DnsQuestion),
    Unanswerable(Unanswerable),
}

impl DecodedQuery {
    pub fn question(&self) -> Option<&DnsQuestion> {
        match self {
            DecodedQuery::Answerable(question) => Some(question),
            DecodedQuery::Unanswerable(_) => None,
        }
    }
}
