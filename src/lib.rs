//! A minimal static file server with an allow-listed fetch proxy.
//!
//! Requests are handled strictly one at a time. Each GET is routed to one of:
//!
//! - a file under the static root (`/` serves `index.html`),
//! - `/fetch?url=<urlencoded>`, which forwards the GET when the target host
//!   contains `google` (a substring check, not a security boundary),
//! - a `404 Not Found` response.
//!
//! Any other method gets `400 Not supported`.
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use doku_server::{parse_request, Method};
//!
//! let request_bytes = b"GET /fetch?url=https%3A%2F%2Fgoogle.de HTTP/1.1\r\nHost: localhost\r\n\r\n";
//!
//! let request = parse_request(request_bytes).unwrap();
//! assert_eq!(request.method, Method::GET);
//! assert_eq!(request.path, "/fetch");
//! assert_eq!(request.get_query_param("url").unwrap(), "https://google.de");
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use doku_server::{HttpServer, ServerConfig};
//!
//! # async fn run() -> Result<(), doku_server::ServerError> {
//! let server = HttpServer::new(ServerConfig::default())?;
//! server.start().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Content types
//!
//! ```
//! use doku_server::content_type_for;
//!
//! assert_eq!(content_type_for(Some("css")), "text/css");
//! assert_eq!(content_type_for(Some("png")), "text");
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, HttpVersion, Method, parse_request};
pub use server::{
    content_type_for, Error as ServerError, Fetcher, HttpFetcher, HttpResponse, HttpServer,
    Router, ServerConfig, StatusCode,
};
