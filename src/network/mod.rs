//! Network Module
//!
//! TCP server and connection handling.
//!
//! ## Architecture
//! - Single acceptor loop
//! - One OS thread per accepted connection, unbounded
//! - One request, one response, then the connection closes

mod connection;
mod server;

pub use connection::Connection;
pub use server::Server;
