//! Shared control, overlay, navigation, and shell primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod navigation;
mod overlays;
mod shell;

pub use controls::{BlinkingCursor, Button, TextArea};
pub use navigation::{MenuBar, StatusBar, StatusBarItem, ToolBar};
pub use overlays::{MenuItem, MenuSeparator, MenuSurface, Modal};
pub use shell::{
    AppShell, DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
    GroupFrame, ResizeHandle, TrayButton, TrayList, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard bevelled action button.
    Standard,
    /// Quiet/toggle style button with no raised face.
    Quiet,
    /// Danger/destructive button.
    Danger,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_layout_class_skips_empty_extras() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("calc-key")),
            "ui-button calc-key"
        );
    }

    #[test]
    fn tokens_are_stable_dom_contract() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonSize::Sm.token(), "sm");
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
