//! Error types for catalogo
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Unified error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// Unrecognized action keyword in a request
    #[error("Ação desconhecida")]
    UnknownAction,

    /// Malformed or missing request fields; the message is wire-ready
    #[error("{0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Catalog Errors
    // -------------------------------------------------------------------------
    /// Insert of a code that is already present
    #[error("Produto já cadastrado")]
    DuplicateCode(i64),

    /// Query or removal of an absent code; a normal miss, not a failure
    #[error("Produto não encontrado")]
    CodeNotFound,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
