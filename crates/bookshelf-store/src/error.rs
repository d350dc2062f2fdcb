//! Error types for the storage layer.

use bookshelf_core::{BookId, NoteId};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),

    /// Book not found.
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    /// A collection lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,
}
