use super::wire::HEADER_LEN;
use captive_portal_domain::DnsQuestion;
use std::net::Ipv4Addr;

/// TTL of every answer, in seconds.
pub const ANSWER_TTL: u32 = 60;

/// QR=1, RD=1, RA=1, RCODE=NOERROR.
const RESPONSE_FLAGS: [u8; 2] = [0x81, 0x80];

/// Pointer to the question name at offset 12.
const NAME_POINTER: [u8; 2] = [0xC0, 0x0C];

const TYPE_A: u16 = 1;
const CLASS_IN: u16 = 1;

/// NAME(2) + TYPE(2) + CLASS(2) + TTL(4) + RDLENGTH(2) + RDATA(4)
const ANSWER_LEN: usize = 16;

/// Builds the single-answer A reply for `question` in wire format.
///
/// The question section is copied verbatim and the answer name is a
/// compression pointer back to it, so the name is never re-encoded.
pub fn encode_reply(question: &DnsQuestion, answer_ip: Ipv4Addr) -> Vec<u8> {
    let raw_question = question.raw_question();
    let mut buf = Vec::with_capacity(HEADER_LEN + raw_question.len() + ANSWER_LEN);

    buf.extend_from_slice(&question.transaction_id().to_be_bytes());
    buf.extend_from_slice(&RESPONSE_FLAGS);
    buf.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
    buf.extend_from_slice(&1u16.to_be_bytes()); // ANCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // NSCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // ARCOUNT

    buf.extend_from_slice(raw_question);

    buf.extend_from_slice(&NAME_POINTER);
    buf.extend_from_slice(&TYPE_A.to_be_bytes());
    buf.extend_from_slice(&CLASS_IN.to_be_bytes());
    buf.extend_from_slice(&ANSWER_TTL.to_be_bytes());
    buf.extend_from_slice(&4u16.to_be_bytes());
    buf.extend_from_slice(&answer_ip.octets());

    buf
}
