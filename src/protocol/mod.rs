//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (pipe-separated text, one request per connection)
//!
//! ### Requests
//! ```text
//! CADASTRAR|<code>|<name>|<price>
//! CONSULTAR|<code>
//! REMOVER|<code>
//! ```
//!
//! `<code>` is an integer, `<price>` a non-negative number, `<name>` is
//! Unicode letters and spaces only (accents allowed).
//!
//! ### Responses
//! ```text
//! 200 OK
//! ------
//! <detail>
//! ```
//! ```text
//! 404 NOT FOUND
//! ------
//! Produto não encontrado
//! ```
//! ```text
//! ERRO|<reason>
//! ```
//!
//! Status responses carry a separator line and a detail line; error
//! responses are a single line.

mod codec;
mod command;
mod response;

pub use codec::{decode_command, encode_command, encode_response};
pub use command::{Command, CommandType};
pub use response::{Response, Status};
