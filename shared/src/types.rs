use serde::{Deserialize, Serialize};

// ========== NOTE ==========
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub user_id: String,
    pub note_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>, // object key, e.g. an S3 upload
    pub created_at: i64,            // epoch millis
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateNoteRequest {
    pub content: String,
    pub attachment: Option<String>,
}

// ========== RESPONSES ==========
/// Body returned on every non-2xx response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureBody {
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FailureBody {
    pub fn new() -> Self {
        Self {
            status: false,
            error: None,
        }
    }

    pub fn with_error(message: &str) -> Self {
        Self {
            status: false,
            error: Some(message.to_string()),
        }
    }
}

impl Default for FailureBody {
    fn default() -> Self {
        Self::new()
    }
}
