//! Axum route handlers for the notes HTTP API.

use crate::notes::{Change, NoteStore, NoteStoreError, file_ops};
use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use notes_types::*;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

const NOT_FOUND: &str = "Note not found.";
const CREATE_INVALID: &str = "Note title and content must be provided.";
const UPDATE_INVALID: &str = "Updated note title and text are required.";
const SAVE_FAILED: &str = "Failed to save notes.";

pub struct AppState {
    pub store: NoteStore,
    /// Static files for the browser client
    pub public_dir: PathBuf,
}

pub fn router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.public_dir);

    Router::new()
        .route("/data", get(list_notes).post(create_note))
        .route(
            "/data/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        .fallback_service(assets)
        .with_state(state)
        .layer(CorsLayer::permissive())
}

#[derive(Debug)]
pub enum ApiError {
    Validation(&'static str),
    NotFound,
    Persistence(NoteStoreError),
}

impl From<NoteStoreError> for ApiError {
    fn from(e: NoteStoreError) -> Self {
        ApiError::Persistence(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND),
            ApiError::Persistence(e) => {
                log::error!("[NOTES] {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, SAVE_FAILED)
            }
        };
        (status, Json(MessageResponse::new(message))).into_response()
    }
}

/// An unreadable body counts as a body with no fields
fn note_input(body: Result<Json<NoteInput>, JsonRejection>) -> NoteInput {
    match body {
        Ok(Json(input)) => input,
        Err(rejection) => {
            log::debug!("[NOTES] Rejected request body: {}", rejection);
            NoteInput::default()
        }
    }
}

// GET /data
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Json<Vec<Note>> {
    Json(state.store.load().await)
}

// GET /data/:id
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    state
        .store
        .load()
        .await
        .into_iter()
        .find(|note| note.id == id)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

// POST /data
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NoteInput>, JsonRejection>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    let Some((title, text)) = note_input(body).validated() else {
        return Err(ApiError::Validation(CREATE_INVALID));
    };

    let now_ms = chrono::Utc::now().timestamp_millis();
    let note = state
        .store
        .modify(|notes| {
            let note = Note {
                id: file_ops::mint_id(notes, now_ms),
                title,
                text,
            };
            notes.push(note.clone());
            Change::Commit(note)
        })
        .await?;

    log::info!("[NOTES] Created note {}", note.id);
    Ok((
        StatusCode::CREATED,
        Json(NoteResponse::new("Note saved successfully", note)),
    ))
}

// PUT /data/:id
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<NoteInput>, JsonRejection>,
) -> Result<Json<NoteResponse>, ApiError> {
    let input = note_input(body);

    // Existence is checked before the body is validated
    let note = state
        .store
        .modify(|notes| {
            let Some(note) = notes.iter_mut().find(|note| note.id == id) else {
                return Change::Keep(Err(ApiError::NotFound));
            };
            let Some((title, text)) = input.validated() else {
                return Change::Keep(Err(ApiError::Validation(UPDATE_INVALID)));
            };
            note.title = title;
            note.text = text;
            Change::Commit(Ok(note.clone()))
        })
        .await??;

    log::info!("[NOTES] Updated note {}", note.id);
    Ok(Json(NoteResponse::new("Note updated successfully", note)))
}

// DELETE /data/:id
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state
        .store
        .modify(|notes| {
            let before = notes.len();
            notes.retain(|note| note.id != id);
            if notes.len() < before {
                Change::Commit(true)
            } else {
                Change::Keep(false)
            }
        })
        .await?;

    if !removed {
        return Err(ApiError::NotFound);
    }

    log::info!("[NOTES] Deleted note {}", id);
    Ok(Json(MessageResponse::new("Note deleted successfully.")))
}
