//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::Error as ParserError;
use crate::server::response::{HttpResponse, StatusCode};

/// Body sent for requests that use any method other than GET.
pub const NOT_SUPPORTED_BODY: &str = "Not supported";

/// Body sent when no file or route matches.
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Body sent when `/fetch` is called without a `url` parameter.
pub const MISSING_URL_BODY: &str = "url parameter is needed";

/// Body sent when the `url` parameter is not an absolute URL.
pub const INVALID_URL_BODY: &str = "url parameter is invalid";

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed or missing input. The message is sent as the response body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No file or route matches the path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request used a method other than GET.
    #[error("Method {0} not supported")]
    MethodNotSupported(String),

    /// The `url` parameter of a fetch is not a valid absolute URL.
    #[error("Invalid fetch URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The outbound HTTP client failed.
    #[error("Fetch error: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The upstream of an allowed fetch could not be read.
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// The configuration file could not be parsed.
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

impl Error {
    /// Convert the error into the response sent to the client.
    pub fn to_response(&self) -> HttpResponse {
        match self {
            Error::MethodNotSupported(_) | Error::ParseError(ParserError::InvalidMethod(_)) => {
                plain(StatusCode::BadRequest, NOT_SUPPORTED_BODY)
            }
            Error::ParseError(e) => {
                plain(StatusCode::BadRequest, format!("Error parsing request: {e}"))
            }
            Error::BadRequest(message) if message.is_empty() => {
                HttpResponse::new(StatusCode::BadRequest).with_body_bytes(Vec::new())
            }
            Error::BadRequest(message) => plain(StatusCode::BadRequest, message.clone()),
            Error::InvalidUrl(_) => plain(StatusCode::BadRequest, INVALID_URL_BODY),
            Error::NotFound(_) => plain(StatusCode::NotFound, NOT_FOUND_BODY),
            Error::FetchError(_) | Error::BadGateway(_) => {
                plain(StatusCode::BadGateway, "502 Bad Gateway")
            }
            Error::IoError(_) | Error::ConfigError(_) => {
                plain(StatusCode::InternalServerError, "500 Internal Server Error")
            }
        }
    }
}

fn plain(status: StatusCode, body: impl Into<String>) -> HttpResponse {
    HttpResponse::new(status)
        .with_content_type("text/plain")
        .with_body_string(body)
}
