#![allow(dead_code)]

mod packets;
mod servers;

pub use packets::{build_query, build_query_with_opcode, encode_name};
pub use servers::{dns_config, loopback_dns_responder, loopback_http_responder, query_once};
