//! HTTP server for doku-server.
//!
//! A sequential accept loop in front of a [`Router`] that serves files from
//! a static root and forwards allow-listed `/fetch` requests.

mod response;
mod config;
mod error;
mod fetch;
mod mime;
mod router;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::{ServerConfig, DEFAULT_PORT, DEFAULT_STATIC_ROOT};
pub use error::{Error, INVALID_URL_BODY, MISSING_URL_BODY, NOT_FOUND_BODY, NOT_SUPPORTED_BODY};
pub use fetch::{FetchFuture, Fetcher, HttpFetcher, ALLOWED_HOST_FRAGMENT, is_allowed};
pub use mime::{content_type_for, content_type_for_path, FALLBACK_CONTENT_TYPE};
pub use router::{Router, FETCH_PATH, INDEX_FILE};
pub use http_server::HttpServer;
