use async_trait::async_trait;
use aws_sdk_dynamodb::{
    error::{DisplayErrorContext, SdkError},
    operation::put_item::PutItemError,
    types::AttributeValue,
    Client as DynamoClient,
};
use std::collections::HashMap;
use std::fmt::Debug;
#[cfg(any(test, feature = "memory-store"))]
use std::sync::Mutex;

use crate::error::StoreError;
use crate::types::Note;

/// Document store holding notes, keyed by (userId, noteId)
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Atomically insert a note. Fails rather than overwrite an existing key.
    async fn put_note(&self, note: &Note) -> Result<(), StoreError>;
}

/// DynamoDB table with partition key `userId` and sort key `noteId`
pub struct DynamoNoteStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoNoteStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Map a note onto DynamoDB attributes. A missing attachment is left out of the item.
pub fn note_to_item(note: &Note) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert("userId".to_string(), AttributeValue::S(note.user_id.clone()));
    item.insert("noteId".to_string(), AttributeValue::S(note.note_id.clone()));
    item.insert("content".to_string(), AttributeValue::S(note.content.clone()));
    if let Some(attachment) = &note.attachment {
        item.insert("attachment".to_string(), AttributeValue::S(attachment.clone()));
    }
    item.insert("createdAt".to_string(), AttributeValue::N(note.created_at.to_string()));
    item
}

#[async_trait]
impl NoteStore for DynamoNoteStore {
    async fn put_note(&self, note: &Note) -> Result<(), StoreError> {
        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(note_to_item(note)))
            .condition_expression("attribute_not_exists(noteId)")
            .send()
            .await;

        result
            .map(|_| ())
            .map_err(|e| put_item_failure(&note.note_id, &e))
    }
}

/// A failed `attribute_not_exists(noteId)` condition means the key is taken;
/// anything else is a rejected write.
fn put_item_failure<R: Debug>(note_id: &str, e: &SdkError<PutItemError, R>) -> StoreError {
    let conflict = e
        .as_service_error()
        .map(|se| se.is_conditional_check_failed_exception())
        .unwrap_or(false);
    if conflict {
        StoreError::AlreadyExists(note_id.to_string())
    } else {
        StoreError::Write(DisplayErrorContext(e).to_string())
    }
}

/// Process-local store with the same insert-if-absent semantics as the DynamoDB table.
/// Test double for the handler and router; enabled outside this crate by the `memory-store` feature.
#[cfg(any(test, feature = "memory-store"))]
#[derive(Default)]
pub struct MemoryNoteStore {
    notes: Mutex<HashMap<(String, String), Note>>,
}

#[cfg(any(test, feature = "memory-store"))]
impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: &str, note_id: &str) -> Option<Note> {
        let notes = self.notes.lock().unwrap_or_else(|p| p.into_inner());
        notes
            .get(&(user_id.to_string(), note_id.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.notes.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(any(test, feature = "memory-store"))]
#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn put_note(&self, note: &Note) -> Result<(), StoreError> {
        let mut notes = self.notes.lock().unwrap_or_else(|p| p.into_inner());
        let key = (note.user_id.clone(), note.note_id.clone());
        if notes.contains_key(&key) {
            return Err(StoreError::AlreadyExists(note.note_id.clone()));
        }
        notes.insert(key, note.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoteError;
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, ResourceNotFoundException,
    };
    use lambda_http::http::StatusCode;

    fn sample_note(note_id: &str, attachment: Option<&str>) -> Note {
        Note {
            user_id: "2aa71372-f926-451b-a05b-cf714e800c8e".to_string(),
            note_id: note_id.to_string(),
            content: "hello world".to_string(),
            attachment: attachment.map(|s| s.to_string()),
            created_at: 1_700_000_000_123,
        }
    }

    #[test]
    fn test_note_to_item_with_attachment() {
        let item = note_to_item(&sample_note("n-1", Some("earth.jpg")));

        assert_eq!(item.len(), 5);
        assert_eq!(
            item.get("userId").and_then(|v| v.as_s().ok()).map(String::as_str),
            Some("2aa71372-f926-451b-a05b-cf714e800c8e")
        );
        assert_eq!(
            item.get("noteId").and_then(|v| v.as_s().ok()).map(String::as_str),
            Some("n-1")
        );
        assert_eq!(
            item.get("attachment").and_then(|v| v.as_s().ok()).map(String::as_str),
            Some("earth.jpg")
        );
        assert_eq!(
            item.get("createdAt").and_then(|v| v.as_n().ok()).map(String::as_str),
            Some("1700000000123")
        );
    }

    #[test]
    fn test_note_to_item_without_attachment() {
        let item = note_to_item(&sample_note("n-1", None));
        assert_eq!(item.len(), 4);
        assert!(!item.contains_key("attachment"));
    }

    #[tokio::test]
    async fn test_memory_store_inserts_once() {
        let store = MemoryNoteStore::new();
        let note = sample_note("n-1", None);

        store.put_note(&note).await.unwrap();
        assert_eq!(store.get(&note.user_id, "n-1"), Some(note.clone()));

        let second = store.put_note(&note).await;
        assert!(matches!(second, Err(StoreError::AlreadyExists(id)) if id == "n-1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_condition_maps_to_already_exists() {
        let e: SdkError<PutItemError, ()> = SdkError::service_error(
            PutItemError::ConditionalCheckFailedException(
                ConditionalCheckFailedException::builder()
                    .message("The conditional request failed")
                    .build(),
            ),
            (),
        );

        let err = put_item_failure("n-1", &e);
        assert!(matches!(&err, StoreError::AlreadyExists(id) if id == "n-1"));
        assert_eq!(
            NoteError::from(err).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_other_service_errors_map_to_write() {
        let e: SdkError<PutItemError, ()> = SdkError::service_error(
            PutItemError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found")
                    .build(),
            ),
            (),
        );

        let err = put_item_failure("n-1", &e);
        assert!(matches!(&err, StoreError::Write(_)));
        assert_eq!(
            NoteError::from(err).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_transport_errors_map_to_write() {
        let e: SdkError<PutItemError, ()> = SdkError::construction_failure("missing region");

        let err = put_item_failure("n-1", &e);
        assert!(matches!(&err, StoreError::Write(detail) if detail.contains("missing region")));
    }
}
