//! Clipboard text access contracts.
//!
//! The browser clipboard API is promise-based and permission-gated, so the
//! trait is async. Copy denial is expected in the wild; adapters fall back to
//! a selection-and-copy shim before reporting failure, and callers treat a
//! final failure as cosmetic.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use thiserror::Error;

/// Object-safe boxed future used by [`TextClipboard`] methods.
pub type ClipboardFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Failure modes of clipboard access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The user agent refused the request (permissions, insecure context).
    #[error("clipboard access denied")]
    Denied,
    /// No clipboard backend exists on this target.
    #[error("clipboard unavailable")]
    Unavailable,
}

/// Host service for plain-text clipboard traffic.
pub trait TextClipboard {
    /// Copies `text` to the clipboard.
    fn copy_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), ClipboardError>>;

    /// Reads the clipboard as plain text.
    fn read_text(&self) -> ClipboardFuture<'_, Result<String, ClipboardError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Clipboard for targets without one; copies vanish, reads are empty.
pub struct NoopClipboard;

impl TextClipboard for NoopClipboard {
    fn copy_text<'a>(&'a self, _text: &'a str) -> ClipboardFuture<'a, Result<(), ClipboardError>> {
        Box::pin(async { Ok(()) })
    }

    fn read_text(&self) -> ClipboardFuture<'_, Result<String, ClipboardError>> {
        Box::pin(async { Ok(String::new()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Test clipboard that remembers every copy and serves reads from the last one.
pub struct RecordingClipboard {
    copied: Rc<RefCell<Vec<String>>>,
}

impl RecordingClipboard {
    /// All texts copied so far, oldest first.
    pub fn copied(&self) -> Vec<String> {
        self.copied.borrow().clone()
    }
}

impl TextClipboard for RecordingClipboard {
    fn copy_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), ClipboardError>> {
        self.copied.borrow_mut().push(text.to_string());
        Box::pin(async { Ok(()) })
    }

    fn read_text(&self) -> ClipboardFuture<'_, Result<String, ClipboardError>> {
        let last = self.copied.borrow().last().cloned().unwrap_or_default();
        Box::pin(async move { Ok(last) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recording_clipboard_round_trips() {
        let clipboard = RecordingClipboard::default();
        let clipboard_obj: &dyn TextClipboard = &clipboard;

        block_on(clipboard_obj.copy_text("first")).expect("copy");
        block_on(clipboard_obj.copy_text("second")).expect("copy");

        assert_eq!(clipboard.copied(), vec!["first", "second"]);
        assert_eq!(block_on(clipboard_obj.read_text()).expect("read"), "second");
    }

    #[test]
    fn noop_clipboard_reads_empty() {
        let clipboard = NoopClipboard;
        block_on(clipboard.copy_text("ignored")).expect("copy");
        assert_eq!(block_on(clipboard.read_text()).expect("read"), "");
    }
}
