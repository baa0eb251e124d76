//! Single-blob document storage contracts and adapters.
//!
//! The site persists exactly one kind of durable data: the notepad document
//! (text plus filename) under a fixed key. The store is synchronous because
//! the only production backend is `localStorage`.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Failure modes of a [`DocumentStore`] backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store cannot be reached (private browsing, quota, non-web target).
    #[error("document store unavailable")]
    Unavailable,
    /// The backing store rejected the write.
    #[error("document write failed: {0}")]
    WriteFailed(String),
    /// Stored or supplied JSON could not be (de)serialized.
    #[error("document serialization failed: {0}")]
    Serialization(String),
}

/// Host service for raw JSON documents keyed by string.
pub trait DocumentStore {
    /// Loads the raw JSON string stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `raw_json` under `key`, replacing any previous value.
    fn save(&self, key: &str, raw_json: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that persists nothing; used on unsupported targets and as a test baseline.
pub struct NoopDocumentStore;

impl DocumentStore for NoopDocumentStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn save(&self, _key: &str, _raw_json: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store shared by clone; the test double for persistence flows.
pub struct MemoryDocumentStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl DocumentStore for MemoryDocumentStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, raw_json: &str) -> Result<(), StorageError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed document through a [`DocumentStore`].
///
/// # Errors
///
/// Returns an error when the store fails or the stored JSON does not parse.
pub fn load_document_with<S: DocumentStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.load(key)? else {
        return Ok(None);
    };
    let value =
        serde_json::from_str(&raw).map_err(|e| StorageError::Serialization(e.to_string()))?;
    Ok(Some(value))
}

/// Serializes and stores a typed document through a [`DocumentStore`].
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_document_with<S: DocumentStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw =
        serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
    store.save(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        content: String,
        file_name: String,
    }

    #[test]
    fn memory_store_round_trip_and_delete() {
        let store = MemoryDocumentStore::default();
        let store_obj: &dyn DocumentStore = &store;

        store_obj.save("doc.key", "{\"k\":1}").expect("save");
        assert_eq!(
            store_obj.load("doc.key").expect("load"),
            Some("{\"k\":1}".to_string())
        );
        store_obj.delete("doc.key").expect("delete");
        assert_eq!(store_obj.load("doc.key").expect("load"), None);
    }

    #[test]
    fn typed_helpers_round_trip() {
        let store = MemoryDocumentStore::default();
        let doc = Doc {
            content: "dear diary".to_string(),
            file_name: "untitled.txt".to_string(),
        };

        save_document_with(&store, "notepad", &doc).expect("save typed");
        let loaded: Option<Doc> = load_document_with(&store, "notepad").expect("load typed");
        assert_eq!(loaded, Some(doc));
    }

    #[test]
    fn corrupt_json_is_a_serialization_error() {
        let store = MemoryDocumentStore::default();
        store.save("notepad", "{not json").expect("save raw");

        let loaded: Result<Option<Doc>, StorageError> = load_document_with(&store, "notepad");
        assert!(matches!(loaded, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopDocumentStore;
        assert_eq!(store.load("k").expect("load"), None);
        store.save("k", "{}").expect("save");
        store.delete("k").expect("delete");
    }
}
