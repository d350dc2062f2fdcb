//! In-memory stores for the notes and books collections.

use std::sync::RwLock;

use bookshelf_core::{Book, BookDraft, BookId, Note, NoteDraft, NoteId};
use chrono::Utc;

use crate::error::{StoreError, StoreResult};

// ============================================================================
// Filters
// ============================================================================

/// Optional filters for listing books.
///
/// The three filters are independent and combinable; an unset field
/// matches every record.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    /// Case-insensitive substring match on the book name. A blank value
    /// (empty or whitespace) matches everything.
    pub name: Option<String>,
    /// Exact match on the `reading` flag.
    pub reading: Option<bool>,
    /// Exact match on the `finished` flag.
    pub finished: Option<bool>,
}

impl BookFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn reading(mut self, reading: bool) -> Self {
        self.reading = Some(reading);
        self
    }

    pub fn finished(mut self, finished: bool) -> Self {
        self.finished = Some(finished);
        self
    }

    fn matches(&self, book: &Book) -> bool {
        if let Some(needle) = self.name.as_deref() {
            let needle = needle.trim();
            if !needle.is_empty()
                && !book.name.to_lowercase().contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        // Records with the flag absent never match an exact filter.
        if let Some(reading) = self.reading {
            if book.reading != Some(reading) {
                return false;
            }
        }

        if let Some(finished) = self.finished {
            if book.finished != finished {
                return false;
            }
        }

        true
    }
}

// ============================================================================
// Store
// ============================================================================

/// Process-wide store holding both resource collections.
///
/// Collections keep insertion order and are scanned linearly by id. Each
/// collection has its own `RwLock`; all locking stays inside this type so
/// callers never hold a guard across an await point.
#[derive(Debug, Default)]
pub struct Store {
    notes: RwLock<Vec<Note>>,
    books: RwLock<Vec<Book>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Notes ====================

    /// Append a new note, stamping `created_at == updated_at`.
    pub fn add_note(&self, draft: NoteDraft) -> StoreResult<Note> {
        let now = Utc::now();
        let note = Note {
            id: NoteId::new(),
            title: draft.title,
            tags: draft.tags,
            body: draft.body,
            created_at: now,
            updated_at: now,
        };

        let mut notes = self.notes.write().map_err(|_| StoreError::LockPoisoned)?;
        notes.push(note.clone());
        Ok(note)
    }

    /// All notes, in insertion order.
    pub fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let notes = self.notes.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(notes.clone())
    }

    /// Look up a single note by id.
    pub fn get_note(&self, id: &NoteId) -> StoreResult<Note> {
        let notes = self.notes.read().map_err(|_| StoreError::LockPoisoned)?;
        notes
            .iter()
            .find(|note| &note.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NoteNotFound(id.clone()))
    }

    /// Replace a note's title, tags, and body, refreshing `updated_at`.
    ///
    /// The id and `created_at` are preserved.
    pub fn update_note(&self, id: &NoteId, draft: NoteDraft) -> StoreResult<Note> {
        let mut notes = self.notes.write().map_err(|_| StoreError::LockPoisoned)?;
        let note = notes
            .iter_mut()
            .find(|note| &note.id == id)
            .ok_or_else(|| StoreError::NoteNotFound(id.clone()))?;

        note.title = draft.title;
        note.tags = draft.tags;
        note.body = draft.body;
        note.updated_at = Utc::now();
        Ok(note.clone())
    }

    /// Remove a note by id.
    pub fn delete_note(&self, id: &NoteId) -> StoreResult<()> {
        let mut notes = self.notes.write().map_err(|_| StoreError::LockPoisoned)?;
        let index = notes
            .iter()
            .position(|note| &note.id == id)
            .ok_or_else(|| StoreError::NoteNotFound(id.clone()))?;
        notes.remove(index);
        Ok(())
    }

    // ==================== Books ====================

    /// Append a new book, deriving `finished` from the draft.
    ///
    /// Callers validate the draft first; the store takes what it is given.
    pub fn add_book(&self, draft: BookDraft) -> StoreResult<Book> {
        let now = Utc::now();
        let book = Book {
            id: BookId::new(),
            finished: draft.derived_finished(),
            name: draft.name.unwrap_or_default(),
            year: draft.year,
            author: draft.author,
            summary: draft.summary,
            publisher: draft.publisher,
            page_count: draft.page_count,
            read_page: draft.read_page,
            reading: draft.reading,
            inserted_at: now,
            updated_at: now,
        };

        let mut books = self.books.write().map_err(|_| StoreError::LockPoisoned)?;
        books.push(book.clone());
        Ok(book)
    }

    /// Books matching the filter, in insertion order.
    pub fn list_books(&self, filter: &BookFilter) -> StoreResult<Vec<Book>> {
        let books = self.books.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(books
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect())
    }

    /// Look up a single book by id.
    pub fn get_book(&self, id: &BookId) -> StoreResult<Book> {
        let books = self.books.read().map_err(|_| StoreError::LockPoisoned)?;
        books
            .iter()
            .find(|book| &book.id == id)
            .cloned()
            .ok_or_else(|| StoreError::BookNotFound(id.clone()))
    }

    /// Replace a book's mutable fields, refreshing `updated_at`.
    ///
    /// The id, `inserted_at`, and `finished` are preserved: the completion
    /// flag keeps the value derived at creation and is not recomputed from
    /// the new page numbers.
    pub fn update_book(&self, id: &BookId, draft: BookDraft) -> StoreResult<Book> {
        let mut books = self.books.write().map_err(|_| StoreError::LockPoisoned)?;
        let book = books
            .iter_mut()
            .find(|book| &book.id == id)
            .ok_or_else(|| StoreError::BookNotFound(id.clone()))?;

        book.name = draft.name.unwrap_or_default();
        book.year = draft.year;
        book.author = draft.author;
        book.summary = draft.summary;
        book.publisher = draft.publisher;
        book.page_count = draft.page_count;
        book.read_page = draft.read_page;
        book.reading = draft.reading;
        book.updated_at = Utc::now();
        Ok(book.clone())
    }

    /// Remove a book by id.
    pub fn delete_book(&self, id: &BookId) -> StoreResult<()> {
        let mut books = self.books.write().map_err(|_| StoreError::LockPoisoned)?;
        let index = books
            .iter()
            .position(|book| &book.id == id)
            .ok_or_else(|| StoreError::BookNotFound(id.clone()))?;
        books.remove(index);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
