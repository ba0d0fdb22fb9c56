//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol. Pure: no I/O,
//! no state. Validation happens here so malformed input never reaches
//! the index.

use super::{Command, Response};
use crate::error::{CatalogError, Result};

/// Field separator in requests
pub const FIELD_SEPARATOR: char = '|';

/// Separator line between a status line and its detail line
const DETAIL_SEPARATOR: &str = "------";

// =============================================================================
// Command Decoding
// =============================================================================

/// Decode a command from raw request bytes
///
/// The request is trimmed, then split on `|`; the first field selects
/// the action.
pub fn decode_command(bytes: &[u8]) -> Result<Command> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| CatalogError::Validation("Formato inválido dos dados".to_string()))?;
    let fields: Vec<&str> = text.trim().split(FIELD_SEPARATOR).collect();

    match fields[0] {
        "CADASTRAR" => decode_register(&fields),
        "CONSULTAR" => Ok(Command::Lookup {
            code: decode_code_field(&fields)?,
        }),
        "REMOVER" => Ok(Command::Remove {
            code: decode_code_field(&fields)?,
        }),
        _ => Err(CatalogError::UnknownAction),
    }
}

/// Decode the CADASTRAR fields: code, name, price
fn decode_register(fields: &[&str]) -> Result<Command> {
    if fields.len() < 4 {
        return Err(CatalogError::Validation("Dados incompletos".to_string()));
    }

    let code: i64 = fields[1]
        .trim()
        .parse()
        .map_err(|_| CatalogError::Validation("Formato inválido dos dados".to_string()))?;
    let name = validate_name(fields[2])?;
    let price: f64 = fields[3]
        .trim()
        .parse()
        .map_err(|_| CatalogError::Validation("Formato inválido dos dados".to_string()))?;
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::Validation(
            "Formato inválido dos dados".to_string(),
        ));
    }

    Ok(Command::Register { code, name, price })
}

/// Decode the single code field of CONSULTAR / REMOVER
fn decode_code_field(fields: &[&str]) -> Result<i64> {
    if fields.len() < 2 {
        return Err(CatalogError::Validation(
            "Código não fornecido".to_string(),
        ));
    }
    fields[1]
        .trim()
        .parse()
        .map_err(|_| CatalogError::Validation("Código inválido".to_string()))
}

/// Validate a product name: Unicode letters (accents included) and
/// spaces, non-empty after trimming
fn validate_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(CatalogError::Validation("Nome inválido".to_string()));
    }
    Ok(name.to_string())
}

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode a command to request bytes (used by the client and tests)
pub fn encode_command(command: &Command) -> Vec<u8> {
    let keyword = command.command_type().keyword();
    let line = match command {
        Command::Register { code, name, price } => {
            format!("{keyword}|{code}|{name}|{price}")
        }
        Command::Lookup { code } | Command::Remove { code } => format!("{keyword}|{code}"),
    };
    line.into_bytes()
}

// =============================================================================
// Response Encoding
// =============================================================================

/// Encode a response to bytes
///
/// Ok/NotFound render as status line, separator line, detail line;
/// errors render as a single `ERRO|<reason>` line.
pub fn encode_response(response: &Response) -> Vec<u8> {
    let text = match response.status.status_line() {
        Some(status_line) => format!(
            "{status_line}\n{DETAIL_SEPARATOR}\n{detail}",
            detail = response.detail
        ),
        None => format!("ERRO|{}", response.detail),
    };
    text.into_bytes()
}
