//! HTTP request parsing.
//!
//! Turns the bytes read from a connection into an [`HttpRequest`]: method,
//! raw path, version, headers and decoded query parameters.

mod request;
mod method;
mod version;
mod error;

// Re-export public items
pub use request::{HttpRequest, header_block_end, percent_decode};
pub use method::Method;
pub use version::HttpVersion;
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;
