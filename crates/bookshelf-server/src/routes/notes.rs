//! Note routes.
//!
//! This module implements the note-related HTTP endpoints:
//! - POST /notes - Create a note
//! - GET /notes - List all notes
//! - GET /notes/{id} - Fetch a note
//! - PUT /notes/{id} - Replace a note's mutable fields
//! - DELETE /notes/{id} - Delete a note

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Serialize;

use bookshelf_core::{Note, NoteDraft, NoteId};
use bookshelf_store::StoreError;

use crate::error::{ApiError, ApiResult};
use crate::response::Envelope;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// Data payload for POST /notes: the new note's id plus the full collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCreatedData {
    pub note_id: NoteId,
    pub notes: Vec<Note>,
}

/// Data payload for GET /notes.
#[derive(Debug, Serialize)]
pub struct NoteListData {
    pub notes: Vec<Note>,
}

/// Data payload for GET /notes/{id}.
#[derive(Debug, Serialize)]
pub struct NoteData {
    pub note: Note,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Map an unexpected store failure to the generic 500 envelope.
fn internal(err: StoreError) -> ApiError {
    tracing::error!(error = %err, "Store operation failed");
    ApiError::Internal("Terjadi kegagalan pada server kami".to_string())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /notes - Create a note.
///
/// # Request
///
/// Body: `{ "title": ..., "tags": [...], "body": ... }` — all fields
/// optional.
///
/// # Response
///
/// - 201 Created: `{ "status": "success", "message": ..., "data": { "noteId": ..., "notes": [...] } }`
///   where `notes` is the full collection after insertion
/// - 500 Internal Server Error: the note could not be stored
async fn add_note(
    State(state): State<AppState>,
    Json(draft): Json<NoteDraft>,
) -> ApiResult<(StatusCode, Json<Envelope<NoteCreatedData>>)> {
    let insert_failed = |err: StoreError| {
        tracing::error!(error = %err, "Failed to add note");
        ApiError::Internal("Catatan gagal ditambahkan".to_string())
    };

    let note = state.store().add_note(draft).map_err(insert_failed)?;
    let notes = state.store().list_notes().map_err(insert_failed)?;

    tracing::info!(note_id = %note.id, "Note created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::message_and_data(
            "Catatan berhasil ditambahkan",
            NoteCreatedData {
                note_id: note.id,
                notes,
            },
        )),
    ))
}

/// GET /notes - List all notes.
///
/// Returns the full collection verbatim, in insertion order.
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Envelope<NoteListData>>> {
    let notes = state.store().list_notes().map_err(internal)?;
    Ok(Json(Envelope::data(NoteListData { notes })))
}

/// GET /notes/{id} - Fetch a single note.
///
/// # Response
///
/// - 200 OK: `{ "status": "success", "data": { "note": {...} } }`
/// - 404 Not Found: unknown id
async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> ApiResult<Json<Envelope<NoteData>>> {
    let note = state.store().get_note(&id).map_err(|err| match err {
        StoreError::NoteNotFound(_) => {
            ApiError::NotFound("Catatan tidak ditemukan".to_string())
        }
        other => internal(other),
    })?;

    Ok(Json(Envelope::data(NoteData { note })))
}

/// PUT /notes/{id} - Replace a note's title, tags, and body.
///
/// # Response
///
/// - 200 OK: `{ "status": "success", "message": ... }`
/// - 500 with a `fail` envelope: unknown id — this endpoint reports a
///   missing id as an internal failure rather than a 404
async fn edit_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
    Json(draft): Json<NoteDraft>,
) -> ApiResult<Json<Envelope<()>>> {
    state
        .store()
        .update_note(&id, draft)
        .map_err(|err| match err {
            StoreError::NoteNotFound(_) => ApiError::UpdateFailed(
                "Gagal memperbarui catatan. Id tidak ditemukan".to_string(),
            ),
            other => internal(other),
        })?;

    tracing::info!(note_id = %id, "Note updated");

    Ok(Json(Envelope::message("Catatan berhasil diperbarui")))
}

/// DELETE /notes/{id} - Delete a note.
///
/// # Response
///
/// - 200 OK: `{ "status": "success", "message": ... }`
/// - 404 Not Found: unknown id
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> ApiResult<Json<Envelope<()>>> {
    state.store().delete_note(&id).map_err(|err| match err {
        StoreError::NoteNotFound(_) => ApiError::NotFound(
            "Catatan gagal dihapus. Id tidak ditemukan".to_string(),
        ),
        other => internal(other),
    })?;

    tracing::info!(note_id = %id, "Note deleted");

    Ok(Json(Envelope::message("Catatan berhasil dihapus")))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(add_note))
        .route(
            "/notes/{id}",
            get(get_note).put(edit_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use bookshelf_store::Store;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::state::AppState;

    fn app() -> Router {
        crate::routes::build_router(AppState::new(Store::new(), ServerConfig::default()))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(payload) => builder
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_add_then_get_note() {
        let app = app();

        let (status, body) = send(
            &app,
            "POST",
            "/notes",
            Some(json!({
                "title": "Belajar Rust",
                "tags": ["rust", "belajar"],
                "body": "Isi catatan"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Catatan berhasil ditambahkan");
        assert_eq!(body["data"]["notes"].as_array().unwrap().len(), 1);

        let id = body["data"]["noteId"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "GET", &format!("/notes/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let note = &body["data"]["note"];
        assert_eq!(note["title"], "Belajar Rust");
        assert_eq!(note["tags"][1], "belajar");
        assert_eq!(note["createdAt"], note["updatedAt"]);
    }

    #[tokio::test]
    async fn test_list_notes_empty() {
        let (status, body) = send(&app(), "GET", "/notes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["notes"], json!([]));
    }

    #[tokio::test]
    async fn test_get_unknown_note() {
        let (status, body) = send(&app(), "GET", "/notes/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Catatan tidak ditemukan");
    }

    #[tokio::test]
    async fn test_edit_note_preserves_id_and_created_at() {
        let app = app();

        let (_, body) = send(
            &app,
            "POST",
            "/notes",
            Some(json!({"title": "sebelum", "tags": [], "body": "a"})),
        )
        .await;
        let id = body["data"]["noteId"].as_str().unwrap().to_string();
        let created_at = body["data"]["notes"][0]["createdAt"].clone();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/notes/{id}"),
            Some(json!({"title": "sesudah", "tags": ["baru"], "body": "b"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Catatan berhasil diperbarui");

        let (_, body) = send(&app, "GET", &format!("/notes/{id}"), None).await;
        let note = &body["data"]["note"];
        assert_eq!(note["title"], "sesudah");
        assert_eq!(note["id"], id.as_str());
        assert_eq!(note["createdAt"], created_at);
        assert!(note["updatedAt"].as_str().unwrap() >= created_at.as_str().unwrap());
    }

    #[tokio::test]
    async fn test_edit_unknown_note_is_internal_failure() {
        let (status, body) = send(
            &app(),
            "PUT",
            "/notes/missing",
            Some(json!({"title": "x", "tags": [], "body": "y"})),
        )
        .await;

        // Unknown ids on this endpoint answer 500, with a `fail` body.
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Gagal memperbarui catatan. Id tidak ditemukan");
    }

    #[tokio::test]
    async fn test_delete_note_then_get_fails() {
        let app = app();

        let (_, body) = send(
            &app,
            "POST",
            "/notes",
            Some(json!({"title": "sementara", "tags": [], "body": ""})),
        )
        .await;
        let id = body["data"]["noteId"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "DELETE", &format!("/notes/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Catatan berhasil dihapus");

        let (status, _) = send(&app, "GET", &format!("/notes/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_unknown_note() {
        let (status, body) = send(&app(), "DELETE", "/notes/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Catatan gagal dihapus. Id tidak ditemukan");
    }

    #[tokio::test]
    async fn test_add_note_with_partial_payload() {
        let app = app();

        let (status, body) = send(&app, "POST", "/notes", Some(json!({"title": "saja"}))).await;
        assert_eq!(status, StatusCode::CREATED);

        // Omitted fields stay omitted in the stored record.
        let note = &body["data"]["notes"][0];
        assert_eq!(note["title"], "saja");
        assert!(note.get("tags").is_none());
        assert!(note.get("body").is_none());
    }
}
