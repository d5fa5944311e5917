use lambda_http::{http::StatusCode, Body, Error, Response};

use crate::error::NoteError;
use crate::ids::IdGenerator;
use crate::responses;
use crate::store::NoteStore;
use crate::types::{CreateNoteRequest, Note};

/// Create a note for the authenticated user and return the stored record
pub async fn create_note(
    store: &dyn NoteStore,
    ids: &dyn IdGenerator,
    user_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    match store_note(store, ids, user_id, body).await {
        Ok(note) => {
            tracing::info!("Note created: {} (user: {})", note.note_id, note.user_id);
            responses::json(StatusCode::OK, &note)
        }
        Err(e) => error_response(&e),
    }
}

/// Map a create-note failure to its response, logging the detail the client never sees
pub fn error_response(e: &NoteError) -> Result<Response<Body>, Error> {
    match e {
        NoteError::StoreWriteFailure(_) => tracing::error!("{}", e),
        _ => tracing::warn!("{}", e),
    }
    responses::failure(e.status_code(), e.public_message())
}

async fn store_note(
    store: &dyn NoteStore,
    ids: &dyn IdGenerator,
    user_id: &str,
    body: &[u8],
) -> Result<Note, NoteError> {
    let req: CreateNoteRequest = serde_json::from_slice(body)?;
    let note = build_note(req, user_id, ids.generate());

    store.put_note(&note).await?;
    Ok(note)
}

fn build_note(req: CreateNoteRequest, user_id: &str, note_id: String) -> Note {
    Note {
        user_id: user_id.to_string(),
        note_id,
        content: req.content,
        attachment: req.attachment,
        created_at: chrono::Utc::now().timestamp_millis(),
    }
}
