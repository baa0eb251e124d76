//! Contract between the desktop window manager runtime and hosted apps.
//!
//! Apps are mounted as plain Leptos views through a registry of
//! [`AppModule`]s. The runtime hands each instance an [`AppMountContext`]
//! carrying window-level commands and the host services the toy apps need:
//! document storage for the notepad blob, clipboard text access, and a clock.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::{Callable, Callback, View};
use platform_host::{Clock, DocumentStore, TextClipboard};

/// Stable identifier for an app package, `segment.segment` dotted lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` conforms to the dotted-segment policy.
    ///
    /// # Errors
    ///
    /// Returns a description of the violated rule otherwise.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected namespaced dotted segments"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 120 {
        return false;
    }

    let mut count = 0usize;
    for part in raw.split('.') {
        count += 1;
        if part.is_empty() || part.len() > 32 {
            return false;
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return false;
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return false;
        }
        if part.ends_with('-') {
            return false;
        }
    }

    count >= 2
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Window-level requests an app may send back to the desktop runtime.
pub enum AppCommand {
    /// Close the window hosting this app instance.
    CloseWindow,
    /// Minimize the window hosting this app instance.
    MinimizeWindow,
    /// Replace the hosting window's title bar text.
    SetWindowTitle {
        /// New title text.
        title: String,
    },
}

#[derive(Clone, Copy)]
/// Window integration handle scoped to one app instance.
pub struct WindowService {
    sender: Callback<AppCommand>,
}

impl WindowService {
    /// Asks the runtime to close this window.
    pub fn request_close(&self) {
        self.sender.call(AppCommand::CloseWindow);
    }

    /// Asks the runtime to minimize this window.
    pub fn request_minimize(&self) {
        self.sender.call(AppCommand::MinimizeWindow);
    }

    /// Asks the runtime for a title change.
    pub fn set_title(&self, title: impl Into<String>) {
        self.sender.call(AppCommand::SetWindowTitle {
            title: title.into(),
        });
    }
}

#[derive(Clone)]
/// Injected service bundle: window commands plus the host seams apps use.
pub struct AppServices {
    /// Window integration service.
    pub window: WindowService,
    documents: Rc<dyn DocumentStore>,
    clipboard: Rc<dyn TextClipboard>,
    clock: Rc<dyn Clock>,
}

impl AppServices {
    /// Bundles the runtime command callback with concrete host adapters.
    pub fn new(
        sender: Callback<AppCommand>,
        documents: Rc<dyn DocumentStore>,
        clipboard: Rc<dyn TextClipboard>,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self {
            window: WindowService { sender },
            documents,
            clipboard,
            clock,
        }
    }

    /// Document store for app persistence (the notepad blob).
    pub fn documents(&self) -> Rc<dyn DocumentStore> {
        Rc::clone(&self.documents)
    }

    /// Plain-text clipboard access.
    pub fn clipboard(&self) -> Rc<dyn TextClipboard> {
        Rc::clone(&self.clipboard)
    }

    /// Millisecond wall clock.
    pub fn clock(&self) -> Rc<dyn Clock> {
        Rc::clone(&self.clock)
    }
}

#[derive(Clone)]
/// Per-window mount context injected by the desktop runtime.
pub struct AppMountContext {
    /// Stable app id from the runtime catalog.
    pub app_id: ApplicationId,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// App module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
