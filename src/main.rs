//! doku-server binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use doku_server::{HttpServer, ServerConfig};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "doku-server")]
#[command(about = "Serve a static directory and proxy allow-listed GET requests", long_about = None)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Directory to serve files from
    #[arg(long)]
    root: Option<PathBuf>,

    /// Timeout for outbound fetches, in seconds
    #[arg(long, value_name = "SECS")]
    fetch_timeout: Option<u64>,
}

impl Cli {
    fn into_config(self) -> Result<ServerConfig, doku_server::ServerError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(addr) = self.addr {
            config.addr = addr;
        }
        if let Some(root) = self.root {
            config.static_root = root;
        }
        if self.fetch_timeout.is_some() {
            config.fetch_timeout_secs = self.fetch_timeout;
        }

        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config()?;
    if config.fetch_timeout().is_none() {
        info!("No fetch timeout configured; a hanging upstream blocks the server");
    }

    let server = HttpServer::new(config)?;
    server.start().await?;

    Ok(())
}
