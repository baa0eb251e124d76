use super::*;

#[component]
/// Horizontal app menu bar hosting menu trigger buttons.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-bar", layout_class)
            role="menubar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-bar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal tool strip for palettes and compact controls.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tool-bar", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="tool-bar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Inset status strip at the bottom of an app window.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-status-bar", layout_class)
            role="status"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="status-bar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Single cell inside a [`StatusBar`].
pub fn StatusBarItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-status-bar-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="status-bar-item"
            data-ui-slot=ui_slot
        >
            {children()}
        </span>
    }
}
