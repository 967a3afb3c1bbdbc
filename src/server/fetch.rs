//! Outbound fetches for the `/fetch` route.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use url::Url;

use crate::server::error::Error;

/// Substring a target host must contain for the fetch to be forwarded.
pub const ALLOWED_HOST_FRAGMENT: &str = "google";

/// Type alias for a boxed future that resolves to the fetched body.
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>, Error>> + Send + 'a>>;

/// Performs the outbound GET for an allowed fetch.
pub trait Fetcher: Send + Sync {
    /// GET `url` and return the whole response body.
    fn fetch<'a>(&'a self, url: &'a Url) -> FetchFuture<'a>;
}

/// Whether a fetch to `url` may be forwarded.
///
/// SECURITY: this is a substring match anywhere in the host, so
/// `google.attacker.example` and `notgoogle.com` both pass. It is not a
/// trust boundary and must not be relied on as one.
pub fn is_allowed(url: &Url) -> bool {
    url.host_str()
        .is_some_and(|host| host.contains(ALLOWED_HOST_FRAGMENT))
}

/// [`Fetcher`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher. Without a timeout a hanging upstream blocks forever.
    pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a Url) -> FetchFuture<'a> {
        Box::pin(async move {
            let response = self
                .client
                .get(url.clone())
                .send()
                .await?
                .error_for_status()?;
            let body = response.bytes().await?;
            Ok(body.to_vec())
        })
    }
}
