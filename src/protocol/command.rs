//! Command definitions
//!
//! Represents commands from clients.

/// Command types, named by their wire keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Cadastrar,
    Consultar,
    Remover,
}

impl CommandType {
    /// The wire keyword selecting this command
    pub fn keyword(self) -> &'static str {
        match self {
            CommandType::Cadastrar => "CADASTRAR",
            CommandType::Consultar => "CONSULTAR",
            CommandType::Remover => "REMOVER",
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a new product
    Register {
        code: i64,
        name: String,
        price: f64,
    },

    /// Look up a product by code
    Lookup { code: i64 },

    /// Remove a product by code
    Remove { code: i64 },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Register { .. } => CommandType::Cadastrar,
            Command::Lookup { .. } => CommandType::Consultar,
            Command::Remove { .. } => CommandType::Remover,
        }
    }
}
