//! JSON-RPC adapter between HTTP requests and agent invocations

mod adapter;
mod extract;

pub use adapter::handle_request;
pub use extract::{extract_text, inbound_messages};
