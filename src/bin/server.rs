//! Catalog Server Binary
//!
//! Starts the TCP server for the product catalog.

use std::sync::Arc;

use catalogo::network::Server;
use catalogo::{Catalog, Config};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Catalog Server
#[derive(Parser, Debug)]
#[command(name = "catalogo-server")]
#[command(about = "In-memory product catalog over TCP")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Listen backlog
    #[arg(short, long, default_value = "5")]
    backlog: i32,

    /// Max request size in bytes
    #[arg(short = 'm', long, default_value = "1024")]
    max_request_bytes: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalogo=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Catalog server v{}", catalogo::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let config = Config::builder()
        .listen_addr(&args.listen)
        .backlog(args.backlog)
        .max_request_bytes(args.max_request_bytes)
        .build();

    let catalog = Arc::new(Catalog::new());

    let server = match Server::new(config, catalog) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to bind listener: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
