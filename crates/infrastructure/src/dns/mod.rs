pub mod responder;
pub mod wire;
pub mod wire_response;

pub use responder::DnsResponder;
pub use wire::decode;
pub use wire_response::encode_reply;
