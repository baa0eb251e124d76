//! `localStorage`-backed document store.

use platform_host::{DocumentStore, StorageError};

#[derive(Debug, Clone, Copy, Default)]
/// Document store backed by `window.localStorage`.
///
/// Off-wasm every load reads empty and every write succeeds silently, which
/// keeps native test builds of dependent crates behaviorally equivalent to a
/// browser in private-browsing mode.
pub struct WebDocumentStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl DocumentStore for WebDocumentStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            Ok(local_storage()?.get_item(key).ok().flatten())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn save(&self, key: &str, raw_json: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw_json)
                .map_err(|e| StorageError::WriteFailed(format!("{e:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::WriteFailed(format!("{e:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_fallback_is_empty_and_infallible() {
        let store = WebDocumentStore;
        assert_eq!(store.load("win31-notepad-content").expect("load"), None);
        store.save("win31-notepad-content", "{}").expect("save");
        store.delete("win31-notepad-content").expect("delete");
    }
}
