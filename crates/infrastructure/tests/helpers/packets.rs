/// Encodes `domain` as a DNS label chain, ignoring a trailing dot.
pub fn encode_name(domain: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    for label in domain.trim_end_matches('.').split('.') {
        if label.is_empty() {
            continue;
        }
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00); // root label
    buf
}

pub fn build_query(id: u16, domain: &str) -> Vec<u8> {
    build_query_with_opcode(id, domain, 0)
}

pub fn build_query_with_opcode(id: u16, domain: &str, opcode: u8) -> Vec<u8> {
    let flags: u16 = ((opcode as u16 & 0x0F) << 11) | 0x0100; // RD set
    let mut buf = Vec::with_capacity(64);
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&flags.to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x01]); // QDCOUNT = 1
    buf.extend_from_slice(&[0x00, 0x00]); // ANCOUNT = 0
    buf.extend_from_slice(&[0x00, 0x00]); // NSCOUNT = 0
    buf.extend_from_slice(&[0x00, 0x00]); // ARCOUNT = 0
    buf.extend_from_slice(&encode_name(domain));
    buf.extend_from_slice(&[0x00, 0x01]); // QTYPE = A
    buf.extend_from_slice(&[0x00, 0x01]); // QCLASS = IN
    buf
}
