//! Shared plumbing for CLI commands.

pub mod books;
pub mod notes;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Response envelope returned by every server endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Send a request and deserialize the envelope.
///
/// A `fail` or `error` status becomes a CLI error carrying the server's
/// message.
pub async fn make_request<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<Envelope<T>> {
    let response = request.send().await.context("request failed")?;
    let envelope: Envelope<T> = response
        .json()
        .await
        .context("invalid response body")?;

    if envelope.status != "success" {
        bail!(
            envelope
                .message
                .unwrap_or_else(|| format!("server answered with status {}", envelope.status))
        );
    }

    Ok(envelope)
}

/// Types that can render a human-readable summary.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Message-only responses have nothing extra to render.
impl HumanReadable for () {
    fn print_human(&self) {}
}

/// Print an envelope as JSON, or formatted when `human` is set.
pub fn output<T: Serialize + HumanReadable>(envelope: &Envelope<T>, human: bool) -> Result<()> {
    if human {
        if let Some(message) = &envelope.message {
            println!("{}", message.green().bold());
        }
        if let Some(data) = &envelope.data {
            data.print_human();
        }
    } else {
        println!("{}", serde_json::to_string_pretty(envelope)?);
    }
    Ok(())
}

/// Format a timestamp for human output.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Ask for confirmation before a destructive command; `yes` skips the prompt.
///
/// Returns false when the user aborts.
pub fn confirm_delete(what: &str, id: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    eprint!(
        "{} Are you sure you want to delete {} {}? [y/N] ",
        "Warning:".yellow().bold(),
        what,
        id
    );

    use std::io::Write;
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim().eq_ignore_ascii_case("y") {
        Ok(true)
    } else {
        eprintln!("Aborted.");
        Ok(false)
    }
}
