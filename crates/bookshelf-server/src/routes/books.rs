//! Book routes.
//!
//! This module implements the book-related HTTP endpoints:
//! - POST /books - Add a book to the shelf
//! - GET /books - List books, with optional name/reading/finished filters
//! - GET /books/{bookId} - Fetch a book
//! - PUT /books/{bookId} - Replace a book's mutable fields
//! - DELETE /books/{bookId} - Delete a book

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use bookshelf_core::{Book, BookDraft, BookId};
use bookshelf_store::{BookFilter, StoreError};

use crate::error::{ApiError, ApiResult};
use crate::response::Envelope;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for GET /books.
///
/// `reading` and `finished` arrive as 0/1 flags; they are kept raw here
/// and parsed leniently in the handler so unparsable values are ignored
/// instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksParams {
    /// Case-insensitive substring filter on the book name.
    pub name: Option<String>,
    /// Reading-state flag (nonzero means true).
    pub reading: Option<String>,
    /// Finished-state flag (nonzero means true).
    pub finished: Option<String>,
}

/// Data payload for POST /books.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreatedData {
    pub book_id: BookId,
}

/// Projection of a book in the list response: id, name, and publisher only.
#[derive(Debug, Serialize)]
pub struct BookSummary {
    pub id: BookId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Data payload for GET /books.
#[derive(Debug, Serialize)]
pub struct BookListData {
    pub books: Vec<BookSummary>,
}

/// Data payload for GET /books/{bookId}.
#[derive(Debug, Serialize)]
pub struct BookData {
    pub book: Book,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Map an unexpected store failure to the generic 500 envelope.
fn internal(err: StoreError) -> ApiError {
    tracing::error!(error = %err, "Store operation failed");
    ApiError::Internal("Terjadi kegagalan pada server kami".to_string())
}

/// Parse a 0/1 query flag: any integer parses (nonzero means true),
/// anything else is ignored.
fn parse_flag(raw: Option<&str>) -> Option<bool> {
    raw.and_then(|s| s.parse::<i64>().ok()).map(|n| n != 0)
}

/// Reject drafts that fail the add/edit validation rules.
///
/// Checks run in order: name presence first, then the page invariant.
/// `prefix` names the failing operation in the message.
fn validate_draft(draft: &BookDraft, prefix: &str) -> Result<(), ApiError> {
    if draft.name_missing() {
        return Err(ApiError::BadRequest(format!(
            "{prefix}. Mohon isi nama buku"
        )));
    }
    if draft.read_page_exceeds_page_count() {
        return Err(ApiError::BadRequest(format!(
            "{prefix}. readPage tidak boleh lebih besar dari pageCount"
        )));
    }
    Ok(())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /books - Add a book.
///
/// # Request
///
/// Body: `{ "name": ..., "year": ..., "author": ..., "summary": ...,
/// "publisher": ..., "pageCount": ..., "readPage": ..., "reading": ... }` —
/// only `name` is required.
///
/// # Response
///
/// - 201 Created: `{ "status": "success", "message": ..., "data": { "bookId": ... } }`
/// - 400 Bad Request: name missing, or readPage > pageCount
/// - 500 Internal Server Error: the book could not be stored
async fn add_book(
    State(state): State<AppState>,
    Json(draft): Json<BookDraft>,
) -> ApiResult<(StatusCode, Json<Envelope<BookCreatedData>>)> {
    validate_draft(&draft, "Gagal menambahkan buku")?;

    let book = state.store().add_book(draft).map_err(|err| {
        tracing::error!(error = %err, "Failed to add book");
        ApiError::Internal("Buku gagal ditambahkan".to_string())
    })?;

    tracing::info!(book_id = %book.id, name = %book.name, "Book created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::message_and_data(
            "Buku berhasil ditambahkan",
            BookCreatedData { book_id: book.id },
        )),
    ))
}

/// GET /books - List books.
///
/// # Query Parameters
///
/// - `name`: substring match on the name, case-insensitive; blank values
///   are ignored
/// - `reading`: 0/1 — exact match on the reading flag
/// - `finished`: 0/1 — exact match on the finished flag
///
/// Filters are independent and combine. The response projects each match
/// to `{ id, name, publisher }`.
async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListBooksParams>,
) -> ApiResult<Json<Envelope<BookListData>>> {
    let mut filter = BookFilter::new();
    if let Some(name) = params.name {
        filter = filter.name(name);
    }
    if let Some(reading) = parse_flag(params.reading.as_deref()) {
        filter = filter.reading(reading);
    }
    if let Some(finished) = parse_flag(params.finished.as_deref()) {
        filter = filter.finished(finished);
    }

    let books = state.store().list_books(&filter).map_err(internal)?;
    let books = books.iter().map(BookSummary::from).collect();

    Ok(Json(Envelope::data(BookListData { books })))
}

/// GET /books/{bookId} - Fetch a single book.
///
/// # Response
///
/// - 200 OK: `{ "status": "success", "data": { "book": {...} } }` with the
///   full record
/// - 404 Not Found: unknown id
async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> ApiResult<Json<Envelope<BookData>>> {
    let book = state.store().get_book(&book_id).map_err(|err| match err {
        StoreError::BookNotFound(_) => ApiError::NotFound("Buku tidak ditemukan".to_string()),
        other => internal(other),
    })?;

    Ok(Json(Envelope::data(BookData { book })))
}

/// PUT /books/{bookId} - Replace a book's mutable fields.
///
/// Validation runs before the existence check, so a bad payload answers
/// 400 even for an unknown id. The `finished` flag keeps the value derived
/// at creation.
///
/// # Response
///
/// - 200 OK: `{ "status": "success", "message": ... }`
/// - 400 Bad Request: name missing, or readPage > pageCount
/// - 404 Not Found: unknown id
async fn edit_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
    Json(draft): Json<BookDraft>,
) -> ApiResult<Json<Envelope<()>>> {
    validate_draft(&draft, "Gagal memperbarui buku")?;

    state
        .store()
        .update_book(&book_id, draft)
        .map_err(|err| match err {
            StoreError::BookNotFound(_) => ApiError::NotFound(
                "Gagal memperbarui buku. Id tidak ditemukan".to_string(),
            ),
            other => internal(other),
        })?;

    tracing::info!(book_id = %book_id, "Book updated");

    Ok(Json(Envelope::message("Buku berhasil diperbarui")))
}

/// DELETE /books/{bookId} - Delete a book.
///
/// # Response
///
/// - 200 OK: `{ "status": "success", "message": ... }`
/// - 404 Not Found: unknown id
async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> ApiResult<Json<Envelope<()>>> {
    state.store().delete_book(&book_id).map_err(|err| match err {
        StoreError::BookNotFound(_) => ApiError::NotFound(
            "Buku gagal dihapus. Id tidak ditemukan".to_string(),
        ),
        other => internal(other),
    })?;

    tracing::info!(book_id = %book_id, "Book deleted");

    Ok(Json(Envelope::message("Buku berhasil dihapus")))
}

/// Build book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route(
            "/books/{bookId}",
            get(get_book).put(edit_book).delete(delete_book),
        )
}

// ============================================================================
// Tests
// ============================================================================
