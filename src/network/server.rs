//! TCP Server
//!
//! Accepts connections and dispatches each to its own handler thread.

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::thread;

use socket2::{Domain, Protocol, Socket, Type};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::network::Connection;

/// TCP server for the product catalog
///
/// Owns the listening socket and the single shared [`Catalog`]. One
/// thread per accepted connection, no cap and no server-side timeouts;
/// both are accepted limitations of this design.
pub struct Server {
    config: Config,
    catalog: Arc<Catalog>,
    listener: TcpListener,
}

impl Server {
    /// Create a server, binding the listening socket eagerly
    ///
    /// The socket is created with SO_REUSEADDR and the configured
    /// backlog. Binding here (rather than in `run`) lets callers bind
    /// port 0 and discover the assigned port via [`Server::local_addr`].
    pub fn new(config: Config, catalog: Arc<Catalog>) -> Result<Self> {
        let addr: SocketAddr = config.listen_addr.parse().map_err(|e| {
            CatalogError::Config(format!("invalid listen address {:?}: {e}", config.listen_addr))
        })?;

        let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(true)?;
        socket.bind(&addr.into())?;
        socket.listen(config.backlog)?;

        Ok(Self {
            config,
            catalog,
            listener: socket.into(),
        })
    }

    /// The address the server is actually listening on
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Run the accept loop (blocking, runs until the process dies)
    ///
    /// Accept and spawn failures are logged and the loop continues; a
    /// failing handler never takes the acceptor down with it.
    pub fn run(&self) -> Result<()> {
        tracing::info!("Catalog server listening on {}", self.local_addr()?);

        loop {
            match self.listener.accept() {
                Ok((stream, peer)) => {
                    tracing::debug!("Accepted connection from {peer}");
                    self.dispatch(stream, peer);
                }
                Err(e) => {
                    tracing::warn!("Failed to accept connection: {e}");
                }
            }
        }
    }

    /// Hand an accepted stream to a fresh handler thread
    fn dispatch(&self, stream: std::net::TcpStream, peer: SocketAddr) {
        let catalog = Arc::clone(&self.catalog);
        let max_request_bytes = self.config.max_request_bytes;

        let spawned = thread::Builder::new()
            .name(format!("conn-{peer}"))
            .spawn(move || {
                let connection = Connection::new(stream, catalog, max_request_bytes);
                if let Err(e) = connection.handle() {
                    tracing::debug!("Connection from {peer} ended with error: {e}");
                }
            });

        if let Err(e) = spawned {
            tracing::warn!("Failed to spawn handler thread for {peer}: {e}");
        }
    }
}
