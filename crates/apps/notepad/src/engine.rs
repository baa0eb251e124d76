//! Notepad document model and selection plumbing.

use platform_host::{load_document_with, save_document_with, DocumentStore, StorageError};
use serde::{Deserialize, Serialize};

/// Storage key kept from the original shipped site so existing notes survive.
pub(crate) const STORAGE_KEY: &str = "win31-notepad-content";

pub(crate) const DEFAULT_FILE_NAME: &str = "untitled.txt";

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

/// Persisted document blob: text plus filename in one JSON value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct NotepadBlob {
    #[serde(default)]
    pub(crate) content: String,
    #[serde(default = "default_file_name")]
    pub(crate) file_name: String,
}

impl Default for NotepadBlob {
    fn default() -> Self {
        Self {
            content: String::new(),
            file_name: default_file_name(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NotepadState {
    blob: NotepadBlob,
    dirty: bool,
}

/// Reads the stored blob, distinguishing absence from a broken store so the
/// caller can log the failure before degrading to a fresh document.
pub(crate) fn load_blob(store: &dyn DocumentStore) -> Result<Option<NotepadBlob>, StorageError> {
    load_document_with(store, STORAGE_KEY)
}

impl NotepadState {
    /// Loads the stored document; a missing or corrupt blob yields a fresh one.
    pub(crate) fn loaded_from(store: &dyn DocumentStore) -> Self {
        let blob = load_blob(store).unwrap_or_default().unwrap_or_default();
        Self { blob, dirty: false }
    }

    pub(crate) fn from_blob(blob: NotepadBlob) -> Self {
        Self { blob, dirty: false }
    }

    pub(crate) fn content(&self) -> &str {
        &self.blob.content
    }

    pub(crate) fn file_name(&self) -> &str {
        &self.blob.file_name
    }

    pub(crate) fn dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn char_count(&self) -> usize {
        self.blob.content.chars().count()
    }

    pub(crate) fn set_content(&mut self, content: String) {
        if self.blob.content != content {
            self.blob.content = content;
            self.dirty = true;
        }
    }

    pub(crate) fn new_document(&mut self) {
        self.blob = NotepadBlob::default();
        self.dirty = false;
    }

    /// Writes the blob through the store and clears the dirty flag on success.
    pub(crate) fn save_to(&mut self, store: &dyn DocumentStore) -> Result<(), StorageError> {
        save_document_with(store, STORAGE_KEY, &self.blob)?;
        self.dirty = false;
        Ok(())
    }
}

/// Maps a UTF-16 code-unit offset (what `selectionStart` reports) to a byte
/// offset into `text`, clamping past-the-end offsets.
fn byte_offset(text: &str, utf16_offset: u32) -> usize {
    let mut seen = 0u32;
    for (index, c) in text.char_indices() {
        if seen >= utf16_offset {
            return index;
        }
        seen += c.len_utf16() as u32;
    }
    text.len()
}

/// Splits `text` on a UTF-16 selection range into (selected, remainder).
pub(crate) fn split_selection(text: &str, start: u32, end: u32) -> (String, String) {
    let (start, end) = (start.min(end), start.max(end));
    let from = byte_offset(text, start);
    let to = byte_offset(text, end);
    let selected = text[from..to].to_string();
    let mut remainder = String::with_capacity(text.len() - selected.len());
    remainder.push_str(&text[..from]);
    remainder.push_str(&text[to..]);
    (selected, remainder)
}

/// Replaces a UTF-16 selection range in `text` with `insert`.
pub(crate) fn replace_range(text: &str, start: u32, end: u32, insert: &str) -> String {
    let (start, end) = (start.min(end), start.max(end));
    let from = byte_offset(text, start);
    let to = byte_offset(text, end);
    let mut result = String::with_capacity(text.len() + insert.len());
    result.push_str(&text[..from]);
    result.push_str(insert);
    result.push_str(&text[to..]);
    result
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryDocumentStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_blob_yields_a_fresh_document() {
        let store = MemoryDocumentStore::default();
        let state = NotepadState::loaded_from(&store);
        assert_eq!(state.content(), "");
        assert_eq!(state.file_name(), DEFAULT_FILE_NAME);
        assert!(!state.dirty());
    }

    #[test]
    fn save_and_reload_round_trips_the_blob() {
        let store = MemoryDocumentStore::default();
        let mut state = NotepadState::loaded_from(&store);
        state.set_content("dear diary,\ntoday I shipped".to_string());
        assert!(state.dirty());

        state.save_to(&store).expect("save");
        assert!(!state.dirty());

        let reloaded = NotepadState::loaded_from(&store);
        assert_eq!(reloaded.content(), "dear diary,\ntoday I shipped");
        assert_eq!(reloaded.file_name(), DEFAULT_FILE_NAME);
    }

    #[test]
    fn corrupt_stored_json_yields_a_fresh_document() {
        let store = MemoryDocumentStore::default();
        store.save(STORAGE_KEY, "{definitely not json").expect("seed");

        let state = NotepadState::loaded_from(&store);
        assert_eq!(state.content(), "");
        assert!(!state.dirty());
    }

    #[test]
    fn partial_blobs_fill_in_defaults() {
        let store = MemoryDocumentStore::default();
        store
            .save(STORAGE_KEY, "{\"content\":\"kept\"}")
            .expect("seed");

        let state = NotepadState::loaded_from(&store);
        assert_eq!(state.content(), "kept");
        assert_eq!(state.file_name(), DEFAULT_FILE_NAME);
    }

    #[test]
    fn unchanged_content_does_not_dirty() {
        let store = MemoryDocumentStore::default();
        let mut state = NotepadState::loaded_from(&store);
        state.set_content(String::new());
        assert!(!state.dirty());
    }

    #[test]
    fn new_document_resets_text_and_name() {
        let store = MemoryDocumentStore::default();
        let mut state = NotepadState::loaded_from(&store);
        state.set_content("scratch".to_string());
        state.new_document();
        assert_eq!(state.content(), "");
        assert!(!state.dirty());
    }

    #[test]
    fn selection_split_handles_ascii_and_reversed_bounds() {
        assert_eq!(
            split_selection("hello world", 6, 11),
            ("world".to_string(), "hello ".to_string())
        );
        assert_eq!(
            split_selection("hello", 4, 1),
            ("ell".to_string(), "ho".to_string())
        );
        assert_eq!(
            split_selection("short", 2, 99),
            ("ort".to_string(), "sh".to_string())
        );
    }

    #[test]
    fn selection_offsets_count_utf16_units() {
        // The emoji occupies two UTF-16 code units.
        let text = "a\u{1F600}b";
        assert_eq!(
            split_selection(text, 1, 3),
            ("\u{1F600}".to_string(), "ab".to_string())
        );
        assert_eq!(replace_range(text, 1, 3, "-"), "a-b");
    }

    #[test]
    fn replace_range_inserts_at_a_collapsed_cursor() {
        assert_eq!(replace_range("ab", 1, 1, "XY"), "aXYb");
        assert_eq!(replace_range("", 0, 0, "text"), "text");
    }
}
