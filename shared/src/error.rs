use lambda_http::http::StatusCode;
use thiserror::Error;

/// Failures reported by a `NoteStore`
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note {0} already exists")]
    AlreadyExists(String),
    #[error("store write rejected: {0}")]
    Write(String),
}

/// Failures of the create-note flow, each mapped to one HTTP status
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("no authenticated subject on request")]
    Unauthenticated,
    #[error("failed to store note: {0}")]
    StoreWriteFailure(#[from] StoreError),
}

impl NoteError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            NoteError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            NoteError::Unauthenticated => StatusCode::UNAUTHORIZED,
            NoteError::StoreWriteFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to clients. Store failures return none at all.
    pub fn public_message(&self) -> Option<&'static str> {
        match self {
            NoteError::MalformedRequest(_) => Some("malformed request"),
            NoteError::Unauthenticated => Some("unauthenticated"),
            NoteError::StoreWriteFailure(_) => None,
        }
    }
}

impl From<serde_json::Error> for NoteError {
    fn from(e: serde_json::Error) -> Self {
        NoteError::MalformedRequest(e.to_string())
    }
}
