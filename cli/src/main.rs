//! Command-line interface for the Bookshelf API.
//!
//! This CLI tool provides commands for both resource collections:
//! - notes: add, list, get, edit, delete
//! - books: add, list, get, edit, delete
//!
//! Configuration via environment:
//! - BOOKSHELF_URL: Base URL of the API server (default: http://localhost:8005)

mod commands;

use clap::{Parser, Subcommand};

use commands::{books::BooksCommand, notes::NotesCommand};

/// Bookshelf API CLI
///
/// Interact with the notes and books collections from the command line.
/// JSON output by default; use --human for formatted output.
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Bookshelf server URL
    #[arg(
        long,
        env = "BOOKSHELF_URL",
        default_value = "http://localhost:8005",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Operate on the notes collection
    #[command(subcommand)]
    Notes(NotesCommand),

    /// Operate on the books collection
    #[command(subcommand)]
    Books(BooksCommand),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let result = match cli.command {
        Commands::Notes(command) => {
            commands::notes::execute(&client, &cli.url, cli.human, command).await
        }
        Commands::Books(command) => {
            commands::books::execute(&client, &cli.url, cli.human, command).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
