//! Fuzz target for the DNS question decoder
//!
//! Feeds arbitrary datagrams to `decode`; it must return an error for bad
//! input, never panic or read out of bounds. Answerable results are encoded
//! and checked against the request.
//!
//! Run with: cargo +nightly fuzz run fuzz_decode

#![no_main]

use captive_portal_domain::DecodedQuery;
use captive_portal_infrastructure::dns::{decode, encode_reply};
use libfuzzer_sys::fuzz_target;
use std::net::Ipv4Addr;

fuzz_target!(|data: &[u8]| {
    if let Ok(DecodedQuery::Answerable(question)) = decode(data) {
        assert!(!question.domain_name().is_empty());

        let reply = encode_reply(&question, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(&reply[0..2], &data[0..2]);
        assert_eq!(&reply[12..12 + question.raw_question().len()], question.raw_question());
    }
});
