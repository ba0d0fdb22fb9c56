//! Connection Handler
//!
//! Handles one client connection: a single request, a single response,
//! then the socket closes.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::sync::Arc;

use crate::catalog::{Catalog, Outcome};
use crate::error::{CatalogError, Result};
use crate::protocol::{decode_command, encode_response, Response};

/// Fallback reason for failures caught at the handler boundary
const INTERNAL_ERROR_REASON: &str = "Falha interna do servidor";

/// Handles a single client connection
pub struct Connection {
    /// The accepted stream; closed on drop, so every exit path releases it
    stream: TcpStream,

    /// Reference to the shared catalog
    catalog: Arc<Catalog>,

    /// Max bytes read for the request
    max_request_bytes: usize,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    pub fn new(stream: TcpStream, catalog: Arc<Catalog>, max_request_bytes: usize) -> Self {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        Self {
            stream,
            catalog,
            max_request_bytes,
            peer_addr,
        }
    }

    /// Handle the connection to completion
    ///
    /// Any unexpected failure is caught here, answered best-effort with a
    /// generic error response, and never propagates past this handler.
    pub fn handle(mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        match self.process() {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!("Error handling request from {}: {}", self.peer_addr, e);
                let fallback = encode_response(&Response::error(INTERNAL_ERROR_REASON));
                let _ = self.stream.write_all(&fallback);
                Err(e)
            }
        }
    }

    /// Read, decode, execute, respond
    fn process(&mut self) -> Result<()> {
        // One read is the whole request; larger requests are truncated
        // (known limitation, no framing).
        let mut buffer = vec![0u8; self.max_request_bytes];
        let n = self.stream.read(&mut buffer)?;
        if n == 0 {
            // Peer closed without sending a request; nothing to answer
            tracing::debug!("Client {} disconnected without a request", self.peer_addr);
            return Ok(());
        }

        let response = match decode_command(&buffer[..n]) {
            Ok(command) => {
                tracing::trace!("Received command from {}: {:?}", self.peer_addr, command);
                self.execute_command(command)
            }
            // Malformed requests are answered, never dropped
            Err(e) => Response::error(&e.to_string()),
        };

        self.send_response(&response)
    }

    /// Execute a command and map the outcome to a response
    ///
    /// The catalog takes and releases its lock inside `execute`; nothing
    /// here runs under the lock.
    fn execute_command(&self, command: crate::protocol::Command) -> Response {
        match self.catalog.execute(command) {
            Ok(Outcome::Registered) => Response::registered(),
            Ok(Outcome::Found(record)) => Response::found(&record),
            Ok(Outcome::Removed) => Response::removed(),
            Err(CatalogError::CodeNotFound) => Response::not_found(),
            Err(e @ CatalogError::DuplicateCode(_)) => Response::error(&e.to_string()),
            Err(e) => {
                tracing::warn!("Unexpected catalog error for {}: {}", self.peer_addr, e);
                Response::error(INTERNAL_ERROR_REASON)
            }
        }
    }

    /// Send a response to the client
    fn send_response(&mut self, response: &Response) -> Result<()> {
        self.stream.write_all(&encode_response(response))?;
        self.stream.flush()?;
        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
