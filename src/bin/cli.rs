//! Catalog CLI Client
//!
//! One-shot client: sends a single request to the server and prints the
//! raw response. One connection per request, matching the protocol.

use std::io::{Read, Write};
use std::net::TcpStream;

use catalogo::protocol::{encode_command, Command};
use catalogo::Result;
use clap::{Parser, Subcommand};

/// Catalog CLI
#[derive(Parser, Debug)]
#[command(name = "catalogo-cli")]
#[command(about = "CLI for the product catalog server")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register a product
    Cadastrar {
        /// Product code
        code: i64,

        /// Product name
        name: String,

        /// Product price
        price: f64,
    },

    /// Look up a product by code
    Consultar {
        /// Product code
        code: i64,
    },

    /// Remove a product by code
    Remover {
        /// Product code
        code: i64,
    },
}

fn main() {
    let args = Args::parse();

    let command = match args.command {
        Commands::Cadastrar { code, name, price } => Command::Register { code, name, price },
        Commands::Consultar { code } => Command::Lookup { code },
        Commands::Remover { code } => Command::Remove { code },
    };

    match send_request(&args.server, &command) {
        Ok(response) => println!("{response}"),
        Err(e) => {
            eprintln!("Request failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Connect, send one request, read the full response
fn send_request(server: &str, command: &Command) -> Result<String> {
    let mut stream = TcpStream::connect(server)?;
    stream.write_all(&encode_command(command))?;
    stream.shutdown(std::net::Shutdown::Write)?;

    let mut response = String::new();
    stream.read_to_string(&mut response)?;
    Ok(response)
}
