//! HTTP server implementation.

use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::signal;

use crate::parser::{Error as ParserError, header_block_end, parse_request};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::router::Router;

/// An HTTP server that answers one connection at a time.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self, Error> {
        let router = Router::from_config(&config)?;
        Ok(Self::with_router(config, router))
    }

    /// Create a server around an already built router.
    pub fn with_router(config: ServerConfig, router: Router) -> Self {
        Self { config, router }
    }

    /// The router requests are dispatched to.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Handle connection errors.
    async fn handle_connection_error(e: std::io::Error) {
        error!("Error accepting connection: {e}");

        // Back off before the next accept
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    /// Start the server and answer connections until Ctrl+C.
    ///
    /// Each connection is read, routed and answered before the next one is
    /// accepted, including any outbound fetch it triggers.
    pub async fn start(&self) -> Result<(), Error> {
        info!("Serving files from {root}", root = self.router.static_root().display());

        let listener = self.setup_listener().await?;

        let shutdown = signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                result = &mut shutdown => {
                    match result {
                        Ok(()) => info!("Received Ctrl+C, shutting down"),
                        Err(e) => error!("Error setting up Ctrl+C handler: {e}"),
                    }
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((mut socket, addr)) => {
                            debug!("Connection from {addr}");
                            if let Err(e) = Self::handle_connection(
                                &mut socket,
                                &self.router,
                                self.config.read_buffer_size,
                            ).await {
                                warn!("Error handling connection from {addr}: {e}");
                            }
                        }
                        Err(e) => Self::handle_connection_error(e).await,
                    }
                }
            }
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Read until the header block is complete, the peer closes, or
    /// `read_buffer_size` bytes have arrived.
    async fn read_request_head(
        socket: &mut (impl AsyncRead + Unpin),
        read_buffer_size: usize,
    ) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0; read_buffer_size];
        let mut filled = 0;

        while filled < buf.len() {
            let n = socket.read(&mut buf[filled..]).await?;
            if n == 0 {
                break;
            }
            filled += n;
            if header_block_end(&buf[..filled]).is_some() {
                break;
            }
        }

        buf.truncate(filled);
        Ok(buf)
    }

    /// Handle a single connection: read one request, write one response.
    ///
    /// A response is written for every request that could be read, including
    /// malformed ones; the returned error only reports what went wrong.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        router: &Router,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let buf = Self::read_request_head(socket, read_buffer_size).await?;
        if buf.is_empty() {
            return Ok(()); // Connection closed
        }

        let (response, outcome) = match parse_request(&buf) {
            Ok(request) => {
                let response = router.route(&request).await;
                info!(
                    "{method} {path} {status}",
                    method = request.method,
                    path = request.path,
                    status = response.status.as_u16()
                );
                (response, Ok(()))
            }
            // Unknown methods are answered like any other non-GET request
            Err(ParserError::InvalidMethod(method)) => {
                let response = Error::MethodNotSupported(method.clone()).to_response();
                info!("{method} rejected {status}", status = response.status.as_u16());
                (response, Ok(()))
            }
            Err(e) => {
                let e = Error::ParseError(e);
                (e.to_response(), Err(e))
            }
        };

        socket.write_all(&response.to_bytes()).await?;
        socket.flush().await?;
        socket.shutdown().await?;

        outcome
    }
}
