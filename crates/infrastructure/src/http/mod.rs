pub mod responder;

pub use responder::{HttpResponder, STATUS_LINE};
