//! Response definitions
//!
//! Represents responses to clients.

use crate::index::Record;

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Rendered as status line `200 OK`
    Ok,

    /// Rendered as status line `404 NOT FOUND`
    NotFound,

    /// Rendered as a single `ERRO|<reason>` line
    Error,
}

impl Status {
    /// The status line for this status; errors have none
    pub fn status_line(self) -> Option<&'static str> {
        match self {
            Status::Ok => Some("200 OK"),
            Status::NotFound => Some("404 NOT FOUND"),
            Status::Error => None,
        }
    }
}

/// A response to send to the client
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Status of the request
    pub status: Status,

    /// Detail line (for Ok/NotFound) or error reason (for Error)
    pub detail: String,
}

impl Response {
    /// Successful registration
    pub fn registered() -> Self {
        Self {
            status: Status::Ok,
            detail: "Produto cadastrado com sucesso!".to_string(),
        }
    }

    /// Successful lookup, carrying the record's fields
    pub fn found(record: &Record) -> Self {
        Self {
            status: Status::Ok,
            detail: format!(
                "codigo: {} | nome: {} | valor: R${:.2}",
                record.code, record.name, record.price
            ),
        }
    }

    /// Successful removal
    pub fn removed() -> Self {
        Self {
            status: Status::Ok,
            detail: "Produto removido com sucesso".to_string(),
        }
    }

    /// Miss on lookup or removal
    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            detail: "Produto não encontrado".to_string(),
        }
    }

    /// Protocol, validation, or internal failure
    pub fn error(reason: &str) -> Self {
        Self {
            status: Status::Error,
            detail: reason.to_string(),
        }
    }
}
