//! Book commands - create, list, get, edit, and delete books.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{Envelope, HumanReadable, confirm_delete, format_timestamp, make_request, output};

/// Subcommands for the books collection.
#[derive(Subcommand)]
pub enum BooksCommand {
    /// Add a book to the shelf
    Add(AddArgs),

    /// List books, with optional filters
    List(ListArgs),

    /// Fetch a single book by id
    Get(GetArgs),

    /// Replace a book's mutable fields
    Edit(EditArgs),

    /// Delete a book by id
    Delete(DeleteArgs),
}

/// Book fields shared by the add and edit commands.
#[derive(Args)]
pub struct BookFields {
    /// Book name
    pub name: String,

    /// Publication year
    #[arg(long)]
    pub year: Option<i64>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Short summary
    #[arg(long)]
    pub summary: Option<String>,

    /// Publisher name
    #[arg(long)]
    pub publisher: Option<String>,

    /// Total page count
    #[arg(long)]
    pub page_count: Option<i64>,

    /// Last page read
    #[arg(long)]
    pub read_page: Option<i64>,

    /// Whether the book is currently being read
    #[arg(long)]
    pub reading: Option<bool>,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: BookFields,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only books whose name contains this text (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Only books with this reading state (0 or 1)
    #[arg(long)]
    pub reading: Option<String>,

    /// Only books with this finished state (0 or 1)
    #[arg(long)]
    pub finished: Option<String>,
}

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Book id
    pub id: String,
}

/// Arguments for the edit command.
#[derive(Args)]
pub struct EditArgs {
    /// Book id
    pub id: String,

    #[command(flatten)]
    pub fields: BookFields,
}

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Book id
    pub id: String,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Request body for creating or editing a book.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookPayload {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    read_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reading: Option<bool>,
}

impl From<BookFields> for BookPayload {
    fn from(fields: BookFields) -> Self {
        Self {
            name: fields.name,
            year: fields.year,
            author: fields.author,
            summary: fields.summary,
            publisher: fields.publisher,
            page_count: fields.page_count,
            read_page: fields.read_page,
            reading: fields.reading,
        }
    }
}

/// A full book record as returned by the server.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_page: Option<i64>,
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<bool>,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HumanReadable for BookView {
    fn print_human(&self) {
        println!("  {} {}", self.id.cyan(), self.name.bold());
        if let Some(author) = &self.author {
            println!("    {} {}", "Author:".cyan(), author);
        }
        if let (Some(read), Some(total)) = (self.read_page, self.page_count) {
            println!("    {} {read}/{total}", "Progress:".cyan());
        }
        println!(
            "    {} {}",
            "Finished:".cyan(),
            if self.finished { "yes" } else { "no" }
        );
        println!(
            "    updated {}",
            format_timestamp(&self.updated_at).dimmed()
        );
    }
}

/// Projection of a book in the list response.
#[derive(Debug, Deserialize, Serialize)]
pub struct BookSummaryView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

/// Data payload of POST /books.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreatedView {
    pub book_id: String,
}

impl HumanReadable for BookCreatedView {
    fn print_human(&self) {
        println!("  {} {}", "ID:".cyan(), self.book_id);
    }
}

/// Data payload of GET /books.
#[derive(Debug, Deserialize, Serialize)]
pub struct BookListView {
    pub books: Vec<BookSummaryView>,
}

impl HumanReadable for BookListView {
    fn print_human(&self) {
        if self.books.is_empty() {
            println!("No books.");
            return;
        }
        for book in &self.books {
            println!(
                "  {} {}  {}",
                book.id.cyan(),
                book.name.bold(),
                book.publisher.as_deref().unwrap_or("").dimmed()
            );
        }
    }
}

/// Data payload of GET /books/{bookId}.
#[derive(Debug, Deserialize, Serialize)]
pub struct BookDataView {
    pub book: BookView,
}

impl HumanReadable for BookDataView {
    fn print_human(&self) {
        self.book.print_human();
    }
}

/// Execute a books subcommand.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    command: BooksCommand,
) -> Result<()> {
    match command {
        BooksCommand::Add(args) => {
            let payload = BookPayload::from(args.fields);
            let envelope: Envelope<BookCreatedView> =
                make_request(client.post(format!("{base_url}/books")).json(&payload)).await?;
            output(&envelope, human)
        }
        BooksCommand::List(args) => {
            let mut query: Vec<(&str, String)> = Vec::new();
            if let Some(name) = args.name {
                query.push(("name", name));
            }
            if let Some(reading) = args.reading {
                query.push(("reading", reading));
            }
            if let Some(finished) = args.finished {
                query.push(("finished", finished));
            }

            let envelope: Envelope<BookListView> =
                make_request(client.get(format!("{base_url}/books")).query(&query)).await?;
            output(&envelope, human)
        }
        BooksCommand::Get(args) => {
            let envelope: Envelope<BookDataView> =
                make_request(client.get(format!("{base_url}/books/{}", args.id))).await?;
            output(&envelope, human)
        }
        BooksCommand::Edit(args) => {
            let payload = BookPayload::from(args.fields);
            let envelope: Envelope<()> = make_request(
                client
                    .put(format!("{base_url}/books/{}", args.id))
                    .json(&payload),
            )
            .await?;
            output(&envelope, human)
        }
        BooksCommand::Delete(args) => {
            if human && !confirm_delete("book", &args.id, args.yes)? {
                return Ok(());
            }
            let envelope: Envelope<()> =
                make_request(client.delete(format!("{base_url}/books/{}", args.id))).await?;
            output(&envelope, human)
        }
    }
}
