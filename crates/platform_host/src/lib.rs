//! Typed host-domain contracts shared between the runtime and browser adapters.
//!
//! This crate is the boundary for platform services the desktop and its apps
//! rely on: wall-clock time, single-blob document storage, and clipboard text
//! access. Concrete browser adapters live in `platform_host_web`; everything
//! here is implementable in plain Rust so engines and reducers stay testable
//! off-wasm.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod storage;
pub mod time;

pub use clipboard::{
    ClipboardError, ClipboardFuture, NoopClipboard, RecordingClipboard, TextClipboard,
};
pub use storage::{
    load_document_with, save_document_with, DocumentStore, MemoryDocumentStore, NoopDocumentStore,
    StorageError,
};
pub use time::{unix_time_ms_now, Clock, ManualClock, SystemClock};
