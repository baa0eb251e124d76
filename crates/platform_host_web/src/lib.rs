//! Browser implementations of the `platform_host` contracts.
//!
//! Everything here is a thin adapter over `web-sys`: `localStorage` for the
//! document store, `navigator.clipboard` (with an `execCommand` shim) for
//! clipboard text, `Date.now` for the clock. Off-wasm the adapters compile to
//! harmless no-ops so downstream crates keep building and testing natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod clipboard;
mod storage;
mod time;

pub use clipboard::WebClipboard;
pub use storage::WebDocumentStore;
pub use time::WebClock;
