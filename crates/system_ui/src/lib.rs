//! Shared UI primitive library for the desktop shell and built-in apps.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM
//! contract consumed by the bevelled-chrome CSS layers. Apps compose these
//! primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    AppShell, BlinkingCursor, Button, ButtonSize, ButtonVariant, DesktopBackdrop,
    DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, GroupFrame, MenuBar,
    MenuItem, MenuSeparator, MenuSurface, Modal, ResizeHandle, StatusBar, StatusBarItem, TextArea,
    ToolBar, TrayButton, TrayList, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppShell, BlinkingCursor, Button, ButtonSize, ButtonVariant, DesktopBackdrop,
        DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, GroupFrame, MenuBar,
        MenuItem, MenuSeparator, MenuSurface, Modal, ResizeHandle, StatusBar, StatusBarItem,
        TextArea, ToolBar, TrayButton, TrayList, WindowBody, WindowControlButton, WindowControls,
        WindowFrame, WindowTitle, WindowTitleBar,
    };
}
