//! # catalogo
//!
//! A small network-accessible product catalog:
//! - Records keyed by integer code, held in an in-memory binary search tree
//! - Line-oriented `|`-separated text protocol, one request per connection
//! - Thread-per-connection server with a single coarse lock on the index
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │              (thread per connection)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Connection Handler                           │
//! │        (read → decode → execute → respond → close)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Protocol   │          │   Catalog   │
//!   │   Codec     │          │   (Mutex)   │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │OrderedIndex │
//!                           │    (BST)    │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod catalog;
pub mod index;
pub mod network;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use catalog::{Catalog, Outcome};
pub use config::Config;
pub use error::{CatalogError, Result};
pub use index::{OrderedIndex, Record};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of catalogo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
