//! Request routing: static files, allow-listed fetches, errors.

use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use url::Url;

use crate::parser::HttpRequest;
use crate::server::config::ServerConfig;
use crate::server::error::{Error, MISSING_URL_BODY};
use crate::server::fetch::{self, Fetcher, HttpFetcher};
use crate::server::mime;
use crate::server::response::{HttpResponse, StatusCode};

/// File served for paths that end in `/`.
pub const INDEX_FILE: &str = "index.html";

/// Path of the fetch route. Only an exact match reaches it; `/fetch/` and
/// `/fetch/x` are ordinary file lookups.
pub const FETCH_PATH: &str = "/fetch";

/// Maps a request to a static file, an outbound fetch, or an error response.
pub struct Router {
    static_root: PathBuf,
    fetcher: Box<dyn Fetcher>,
}

impl Router {
    /// Create a router serving from `static_root` and fetching through `fetcher`.
    pub fn new(static_root: impl Into<PathBuf>, fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            static_root: static_root.into(),
            fetcher,
        }
    }

    /// Create a router with a `reqwest`-backed fetcher from the server configuration.
    pub fn from_config(config: &ServerConfig) -> Result<Self, Error> {
        let fetcher = HttpFetcher::new(config.fetch_timeout())?;
        Ok(Self::new(config.static_root.clone(), Box::new(fetcher)))
    }

    /// The directory request paths are resolved against.
    pub fn static_root(&self) -> &Path {
        &self.static_root
    }

    /// Produce the response for a request. Never fails: every error becomes
    /// a response.
    pub async fn route(&self, request: &HttpRequest) -> HttpResponse {
        match self.dispatch(request).await {
            Ok(response) => response,
            Err(e) => {
                debug!("{} {} rejected: {e}", request.method, request.path);
                e.to_response()
            }
        }
    }

    async fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        if !request.method.is_supported() {
            return Err(Error::MethodNotSupported(request.method.to_string()));
        }

        let mut path = request
            .decoded_path()
            .ok_or_else(|| Error::BadRequest(String::new()))?;
        if path.ends_with('/') {
            path.push_str(INDEX_FILE);
        }

        if let Some(file) = self.resolve(&path).await {
            return serve_file(&file).await;
        }

        if path == FETCH_PATH {
            if let Some(response) = self.proxy(request).await? {
                return Ok(response);
            }
        }

        Err(Error::NotFound(path))
    }

    /// Resolve a decoded request path to a regular file under the static root.
    ///
    /// Paths with a `..` segment never resolve.
    async fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = path.trim_start_matches('/');
        if relative.split('/').any(|segment| segment == "..") {
            warn!("Refusing path outside the static root: {path}");
            return None;
        }

        let candidate = self.static_root.join(relative);
        match tokio::fs::metadata(&candidate).await {
            Ok(metadata) if metadata.is_file() => Some(candidate),
            _ => None,
        }
    }

    /// Handle the fetch route. `Ok(None)` means the target host is not
    /// allowed and routing falls through to 404.
    async fn proxy(&self, request: &HttpRequest) -> Result<Option<HttpResponse>, Error> {
        let target = request
            .get_query_param("url")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::BadRequest(MISSING_URL_BODY.to_string()))?;

        let url = Url::parse(target)?;
        if !fetch::is_allowed(&url) {
            warn!("Fetch to {url} rejected: host not allowed");
            return Ok(None);
        }

        info!("Fetching {url}");
        let body = match self.fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                error!("Fetch to {url} failed: {e}");
                return Err(Error::BadGateway(url.to_string()));
            }
        };

        let content_type = mime::content_type_for_path(Path::new(url.path()));
        Ok(Some(
            HttpResponse::new(StatusCode::Ok)
                .with_content_type(content_type)
                .with_body_bytes(body),
        ))
    }
}

async fn serve_file(file: &Path) -> Result<HttpResponse, Error> {
    let body = tokio::fs::read(file).await.map_err(|e| {
        error!("Failed to read {}: {e}", file.display());
        e
    })?;

    Ok(HttpResponse::new(StatusCode::Ok)
        .with_content_type(mime::content_type_for_path(file))
        .with_body_bytes(body))
}
