//! Record and draft types for the two resource collections.
//!
//! Records are what the store holds and the API returns; drafts are the
//! caller-supplied payloads of create and update requests. Fields a caller
//! may omit are `Option` and stay absent all the way through: a note created
//! without a body has no `body` key in any response.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// An opaque string, generated at creation. Wrapping it in a newtype keeps
/// note and book identifiers from being confused for each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub String);

impl NoteId {
    /// Creates a new random NoteId.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a book.
///
/// An opaque string, generated at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub String);

impl BookId {
    /// Creates a new random BookId.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BookId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ============================================================================
// Notes
// ============================================================================

/// A free-form titled text record with tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Set once at creation, never changed by edits.
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at` at creation, refreshed on every edit.
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or updating a note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

// ============================================================================
// Books
// ============================================================================

/// A catalog record tracking reading progress.
///
/// `finished` is derived from `read_page == page_count` at the creation
/// instant only; edits replace the other mutable fields but leave it as
/// created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
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
    /// Set once at creation, never changed by edits.
    pub inserted_at: DateTime<Utc>,
    /// Equal to `inserted_at` at creation, refreshed on every edit.
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or updating a book.
///
/// `name` is required by the API but modeled as `Option` here: its absence
/// is a validation failure answered by the handler, not a deserialization
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<bool>,
}

impl BookDraft {
    /// True when `name` is absent or empty.
    #[must_use]
    pub fn name_missing(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty)
    }

    /// True when a supplied `read_page` exceeds a supplied `page_count`.
    ///
    /// The invariant is only checked when both values are present; a draft
    /// with either missing passes.
    #[must_use]
    pub fn read_page_exceeds_page_count(&self) -> bool {
        matches!(
            (self.read_page, self.page_count),
            (Some(read), Some(total)) if read > total
        )
    }

    /// Completion flag as derived at creation time.
    ///
    /// Compares `read_page` and `page_count` as supplied, so two absent
    /// values count as equal.
    #[must_use]
    pub fn derived_finished(&self) -> bool {
        self.page_count == self.read_page
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_unique() {
        assert_ne!(NoteId::new(), NoteId::new());
    }

    #[test]
    fn test_note_serializes_camel_case() {
        let note = Note {
            id: NoteId::from("abc"),
            title: Some("Belajar".to_string()),
            tags: Some(vec!["rust".to_string()]),
            body: Some("isi".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], "abc");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_note_absent_fields_stay_absent() {
        let note = Note {
            id: NoteId::new(),
            title: None,
            tags: None,
            body: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("title").is_none());
        assert!(json.get("tags").is_none());
        assert!(json.get("body").is_none());
    }

    #[test]
    fn test_note_draft_from_partial_payload() {
        let draft: NoteDraft = serde_json::from_str(r#"{"title": "Judul"}"#).unwrap();
        assert_eq!(draft.title.as_deref(), Some("Judul"));
        assert!(draft.tags.is_none());
        assert!(draft.body.is_none());
    }

    #[test]
    fn test_book_draft_camel_case_fields() {
        let draft: BookDraft =
            serde_json::from_str(r#"{"name": "Buku", "pageCount": 100, "readPage": 25}"#).unwrap();
        assert_eq!(draft.page_count, Some(100));
        assert_eq!(draft.read_page, Some(25));
    }

    #[test]
    fn test_name_missing() {
        assert!(BookDraft::default().name_missing());
        let empty = BookDraft {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(empty.name_missing());
        let named = BookDraft {
            name: Some("Buku".to_string()),
            ..Default::default()
        };
        assert!(!named.name_missing());
    }

    #[test]
    fn test_read_page_check_needs_both_values() {
        let exceeds = BookDraft {
            page_count: Some(100),
            read_page: Some(101),
            ..Default::default()
        };
        assert!(exceeds.read_page_exceeds_page_count());

        let within = BookDraft {
            page_count: Some(100),
            read_page: Some(100),
            ..Default::default()
        };
        assert!(!within.read_page_exceeds_page_count());

        let half_specified = BookDraft {
            read_page: Some(101),
            ..Default::default()
        };
        assert!(!half_specified.read_page_exceeds_page_count());
    }

    #[test]
    fn test_derived_finished() {
        let done = BookDraft {
            page_count: Some(100),
            read_page: Some(100),
            ..Default::default()
        };
        assert!(done.derived_finished());

        let in_progress = BookDraft {
            page_count: Some(100),
            read_page: Some(99),
            ..Default::default()
        };
        assert!(!in_progress.derived_finished());

        // Neither value supplied compares equal.
        assert!(BookDraft::default().derived_finished());
    }

    #[test]
    fn test_book_round_trip() {
        let book = Book {
            id: BookId::from("b1"),
            name: "Buku A".to_string(),
            year: Some(2020),
            author: Some("Penulis".to_string()),
            summary: None,
            publisher: Some("Penerbit".to_string()),
            page_count: Some(100),
            read_page: Some(100),
            finished: true,
            reading: Some(false),
            inserted_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("\"pageCount\":100"));
        assert!(json.contains("\"insertedAt\""));
        assert!(!json.contains("summary"));

        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, book.id);
        assert!(back.finished);
    }
}
