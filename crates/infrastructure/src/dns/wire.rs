use captive_portal_domain::{DecodedQuery, DnsQuestion, DomainError, Unanswerable};

/// Fixed DNS header size (RFC 1035 §4.1.1).
pub const HEADER_LEN: usize = 12;

/// QTYPE + QCLASS following the question name.
const QTYPE_QCLASS_LEN: usize = 4;

const OPCODE_QUERY: u8 = 0;

/// Decodes the first question of a raw DNS datagram.
///
/// Every read is bounds checked against `buf`: a short header, a label that
/// runs past the end, or a missing QTYPE/QCLASS is reported as
/// [`DomainError::TruncatedMessage`] and never panics.
///
/// Returns [`DecodedQuery::Unanswerable`] for anything the portal must not
/// reply to:
///
/// * OPCODE other than QUERY
/// * QDCOUNT of zero
/// * A question for the root name
pub fn decode(buf: &[u8]) -> Result<DecodedQuery, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(DomainError::TruncatedMessage {
            needed: HEADER_LEN,
            len: buf.len(),
        });
    }

    let transaction_id = u16::from_be_bytes([buf[0], buf[1]]);
    let opcode = (buf[2] >> 3) & 0x0F;

    if opcode != OPCODE_QUERY {
        return Ok(DecodedQuery::Unanswerable(Unanswerable::NonStandardOpcode(
            opcode,
        )));
    }

    let qdcount = u16::from_be_bytes([buf[4], buf[5]]);
    if qdcount == 0 {
        return Ok(DecodedQuery::Unanswerable(Unanswerable::NoQuestion));
    }

    let mut pos = HEADER_LEN;
    let mut domain_name = String::new();

    loop {
        let label_len = match buf.get(pos) {
            Some(&len) => len as usize,
            None => {
                return Err(DomainError::TruncatedMessage {
                    needed: pos + 1,
                    len: buf.len(),
                })
            }
        };
        if label_len == 0 {
            pos += 1;
            break;
        }
        // Pointers (0b11) and the reserved extended label types (0b01, 0b10)
        // have no place in a question we echo back verbatim.
        if label_len & 0xC0 != 0 {
            return Err(DomainError::CompressedLabel { offset: pos });
        }

        let start = pos + 1;
        let end = start + label_len;
        let label = buf.get(start..end).ok_or(DomainError::TruncatedMessage {
            needed: end,
            len: buf.len(),
        })?;
        let label = std::str::from_utf8(label)
            .map_err(|_| DomainError::InvalidLabelEncoding { offset: pos })?;

        domain_name.push_str(label);
        domain_name.push('.');
        pos = end;
    }

    if domain_name.is_empty() {
        return Ok(DecodedQuery::Unanswerable(Unanswerable::RootName));
    }

    let question_end = pos + QTYPE_QCLASS_LEN;
    let raw_question = buf
        .get(HEADER_LEN..question_end)
        .ok_or(DomainError::TruncatedMessage {
            needed: question_end,
            len: buf.len(),
        })?;

    DnsQuestion::new(transaction_id, domain_name, raw_question.to_vec())
        .map(DecodedQuery::Answerable)
}
