//! HTTP request parsing and representation.

use std::collections::HashMap;
use std::str::FromStr;

use url::form_urlencoded;

use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::version::HttpVersion;

/// Represents an HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path as sent on the wire, still percent-encoded, without the query string
    pub path: String,
    /// The HTTP version
    pub version: HttpVersion,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// Query parameters, decoded with `application/x-www-form-urlencoded` rules
    pub query_params: HashMap<String, String>,
}

impl HttpRequest {
    /// Create a new HTTP request from its request target.
    ///
    /// The target is split at the first `?`; everything after it is decoded
    /// into [`HttpRequest::query_params`]. A repeated key keeps its last value.
    pub fn new(method: Method, target: &str, version: HttpVersion, headers: HashMap<String, String>) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };

        let query_params: HashMap<String, String> = query
            .map(|query| form_urlencoded::parse(query.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        Self {
            method,
            path: path.to_string(),
            version,
            headers,
            query_params,
        }
    }

    /// Get a header value, ignoring the case of the name.
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                Some(v)
            } else {
                None
            }
        })
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }

    /// Get a query parameter value.
    pub fn get_query_param(&self, name: &str) -> Option<&String> {
        self.query_params.get(name)
    }

    /// Check if a query parameter exists.
    pub fn has_query_param(&self, name: &str) -> bool {
        self.query_params.contains_key(name)
    }

    /// The percent-decoded path.
    ///
    /// Returns `None` when the path does not start with `/` or its decoded
    /// bytes are not valid UTF-8.
    pub fn decoded_path(&self) -> Option<String> {
        if !self.path.starts_with('/') {
            return None;
        }
        percent_decode(&self.path)
    }
}

/// Percent-decode a path component.
///
/// `%XX` sequences become the byte they encode; a `%` not followed by two hex
/// digits is kept literally. `+` is not treated as a space.
pub fn percent_decode(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut result = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            result.push((hex_value(bytes[i + 1]) << 4) | hex_value(bytes[i + 2]));
            i += 3;
            continue;
        }
        result.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(result).ok()
}

// Caller guarantees an ASCII hex digit.
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

/// Find the end of the header block.
///
/// Returns the offset just past the blank line (`\r\n\r\n`, or `\n\n`
/// from clients that send bare line feeds), or `None` if it has not arrived.
pub fn header_block_end(input: &[u8]) -> Option<usize> {
    let crlf = input.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4);
    let lf = input.windows(2).position(|w| w == b"\n\n").map(|i| i + 2);
    match (crlf, lf) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Parse an HTTP request from a byte slice.
///
/// Only the request line and the header block are read; anything after the
/// blank line is ignored. The request line must be UTF-8; header values are
/// decoded lossily.
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    if input.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let head = match header_block_end(input) {
        Some(end) => &input[..end],
        None => input,
    };

    let mut lines = head
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line));

    let request_line = match lines.next() {
        Some(line) => std::str::from_utf8(line)
            .map_err(|_| Error::MalformedRequestLine("Invalid UTF-8".to_string()))?,
        None => return Err(Error::EmptyRequest),
    };

    // method, target, version
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    }

    let method = Method::from_str(parts[0])?;

    let target = parts[1];
    if target.is_empty() {
        return Err(Error::InvalidPath);
    }

    let version = HttpVersion::from_str(parts[2])?;

    let mut headers = HashMap::new();
    for line in lines {
        // Empty line indicates the end of headers
        if line.is_empty() {
            break;
        }

        let line = String::from_utf8_lossy(line);
        let Some((name, value)) = line.split_once(':') else {
            return Err(Error::InvalidHeaderFormat);
        };

        headers.insert(name.trim().to_string(), value.trim().to_string());
    }

    if version.requires_host() && !headers.keys().any(|k| k.eq_ignore_ascii_case("Host")) {
        return Err(Error::MissingHeader("Host".to_string()));
    }

    Ok(HttpRequest::new(method, target, version, headers))
}
