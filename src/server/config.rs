//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::server::error::Error;

/// Directory, relative to the working directory, that files are served from.
pub const DEFAULT_STATIC_ROOT: &str = "WebFiles";

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// HTTP server configuration.
///
/// Every field has a default, so a config file only needs the values it
/// changes:
///
/// ```json
/// { "addr": "127.0.0.1:9000", "fetch_timeout_secs": 10 }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// Directory that request paths are resolved against.
    pub static_root: PathBuf,
    /// The read buffer size. A request head larger than this is truncated.
    pub read_buffer_size: usize,
    /// Timeout for outbound fetches. `None` waits forever, which blocks the
    /// whole server while the upstream hangs.
    pub fetch_timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// The outbound fetch timeout, if one is configured.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            static_root: PathBuf::from(DEFAULT_STATIC_ROOT),
            read_buffer_size: 8192,
            fetch_timeout_secs: None,
        }
    }
}
