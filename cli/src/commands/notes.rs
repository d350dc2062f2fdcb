//! Note commands - create, list, get, edit, and delete notes.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{Envelope, HumanReadable, confirm_delete, format_timestamp, make_request, output};

/// Subcommands for the notes collection.
#[derive(Subcommand)]
pub enum NotesCommand {
    /// Create a new note
    Add(AddArgs),

    /// List all notes
    List,

    /// Fetch a single note by id
    Get(GetArgs),

    /// Replace a note's title, tags, and body
    Edit(EditArgs),

    /// Delete a note by id
    Delete(DeleteArgs),
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Note title
    #[arg(long)]
    pub title: Option<String>,

    /// Tag to attach (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Note body
    #[arg(long)]
    pub body: Option<String>,
}

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Note id
    pub id: String,
}

/// Arguments for the edit command.
#[derive(Args)]
pub struct EditArgs {
    /// Note id
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New tag (repeatable; replaces the old tags)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// New body
    #[arg(long)]
    pub body: Option<String>,
}

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Note id
    pub id: String,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Request body for creating or editing a note.
#[derive(Serialize)]
struct NotePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
}

impl NotePayload {
    fn new(title: Option<String>, tags: Vec<String>, body: Option<String>) -> Self {
        Self {
            title,
            tags: if tags.is_empty() { None } else { Some(tags) },
            body,
        }
    }
}

/// A note as returned by the server.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HumanReadable for NoteView {
    fn print_human(&self) {
        println!(
            "  {} {}  {}",
            self.id.cyan(),
            self.title.as_deref().unwrap_or("(untitled)").bold(),
            self.tags
                .as_deref()
                .unwrap_or_default()
                .join(", ")
                .dimmed()
        );
        if let Some(body) = &self.body {
            println!("    {body}");
        }
        println!("    updated {}", format_timestamp(&self.updated_at).dimmed());
    }
}

/// Data payload of POST /notes.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCreatedView {
    pub note_id: String,
    pub notes: Vec<NoteView>,
}

impl HumanReadable for NoteCreatedView {
    fn print_human(&self) {
        println!("  {} {}", "ID:".cyan(), self.note_id);
        println!("  {} {}", "Total notes:".cyan(), self.notes.len());
    }
}

/// Data payload of GET /notes.
#[derive(Debug, Deserialize, Serialize)]
pub struct NoteListView {
    pub notes: Vec<NoteView>,
}

impl HumanReadable for NoteListView {
    fn print_human(&self) {
        if self.notes.is_empty() {
            println!("No notes.");
            return;
        }
        for note in &self.notes {
            note.print_human();
        }
    }
}

/// Data payload of GET /notes/{id}.
#[derive(Debug, Deserialize, Serialize)]
pub struct NoteDataView {
    pub note: NoteView,
}

impl HumanReadable for NoteDataView {
    fn print_human(&self) {
        self.note.print_human();
    }
}

/// Execute a notes subcommand.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    command: NotesCommand,
) -> Result<()> {
    match command {
        NotesCommand::Add(args) => {
            let payload = NotePayload::new(args.title, args.tags, args.body);
            let envelope: Envelope<NoteCreatedView> =
                make_request(client.post(format!("{base_url}/notes")).json(&payload)).await?;
            output(&envelope, human)
        }
        NotesCommand::List => {
            let envelope: Envelope<NoteListView> =
                make_request(client.get(format!("{base_url}/notes"))).await?;
            output(&envelope, human)
        }
        NotesCommand::Get(args) => {
            let envelope: Envelope<NoteDataView> =
                make_request(client.get(format!("{base_url}/notes/{}", args.id))).await?;
            output(&envelope, human)
        }
        NotesCommand::Edit(args) => {
            let payload = NotePayload::new(args.title, args.tags, args.body);
            let envelope: Envelope<()> = make_request(
                client
                    .put(format!("{base_url}/notes/{}", args.id))
                    .json(&payload),
            )
            .await?;
            output(&envelope, human)
        }
        NotesCommand::Delete(args) => {
            if human && !confirm_delete("note", &args.id, args.yes)? {
                return Ok(());
            }
            let envelope: Envelope<()> =
                make_request(client.delete(format!("{base_url}/notes/{}", args.id))).await?;
            output(&envelope, human)
        }
    }
}
