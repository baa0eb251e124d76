use std::rc::Rc;

use desktop_app_contract::{AppCommand, AppMountContext, AppServices};
use leptos::*;
use system_ui::prelude::*;

use super::{
    is_primary_pointer, pointer_from_pointer_event, resize_edge_token, try_set_pointer_capture,
};
use crate::apps::{app_module, application_id};
use crate::model::{AppId, ResizeEdge};
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;

const RESIZE_EDGES: [ResizeEdge; 8] = [
    ResizeEdge::North,
    ResizeEdge::South,
    ResizeEdge::East,
    ResizeEdge::West,
    ResizeEdge::NorthEast,
    ResizeEdge::NorthWest,
    ResizeEdge::SouthEast,
    ResizeEdge::SouthWest,
];

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || runtime.state.get().window(app_id).cloned());
    let focused = Signal::derive(move || runtime.state.get().active_window() == Some(app_id));
    let minimized = Signal::derive(move || window.get().map(|w| w.minimized).unwrap_or(false));
    let maximized = Signal::derive(move || window.get().map(|w| w.maximized).unwrap_or(false));
    let title = Signal::derive(move || {
        window
            .get()
            .map(|w| w.title)
            .unwrap_or_else(|| app_id.title().to_string())
    });
    let style = Signal::derive(move || {
        let Some(win) = window.get() else {
            return String::new();
        };
        if win.maximized {
            format!("z-index:{};", win.z_index)
        } else {
            format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
            )
        }
    });

    let focus = move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow { app_id });
    };
    let minimize = move || {
        let at_ms = runtime.now_ms();
        runtime.dispatch_action(DesktopAction::MinimizeWindow { app_id, at_ms });
    };
    let close = move || runtime.dispatch_action(DesktopAction::CloseWindow { app_id });
    let toggle_maximize = move || {
        if maximized.get_untracked() {
            runtime.dispatch_action(DesktopAction::RestoreWindow { app_id });
        } else {
            runtime.dispatch_action(DesktopAction::MaximizeWindow { app_id });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            app_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    // The app view mounts once per window lifetime, so minimize keeps state.
    let services = {
        let sender = Callback::new(move |command: AppCommand| match command {
            AppCommand::CloseWindow => close(),
            AppCommand::MinimizeWindow => minimize(),
            AppCommand::SetWindowTitle { title } => {
                runtime.dispatch_action(DesktopAction::SetWindowTitle { app_id, title });
            }
        });
        runtime.host.with_value(|host| {
            AppServices::new(
                sender,
                Rc::clone(&host.documents),
                Rc::clone(&host.clipboard),
                Rc::clone(&host.clock),
            )
        })
    };
    let contents = app_module(app_id).mount(AppMountContext {
        app_id: application_id(app_id),
        services,
    });

    view! {
        <WindowFrame
            id=format!("window-{}", application_id(app_id))
            style=style
            aria_label=Signal::derive(move || title.get())
            focused=focused
            minimized=minimized
            maximized=maximized
            on_pointerdown=Callback::new(focus)
        >
            <WindowTitleBar
                focused=focused
                on_pointerdown=Callback::new(begin_move)
                on_dblclick=Callback::new(move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    toggle_maximize();
                })
            >
                <WindowTitle title=Signal::derive(move || title.get()) />
                <WindowControls>
                    <WindowControlButton
                        aria_label="Minimize window"
                        on_click=Callback::new(move |_| minimize())
                    >
                        "_"
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label=Signal::derive(move || {
                            if maximized.get() {
                                "Restore window".to_string()
                            } else {
                                "Maximize window".to_string()
                            }
                        })
                        on_click=Callback::new(move |_| toggle_maximize())
                    >
                        {move || if maximized.get() { "\u{2750}" } else { "\u{25A1}" }}
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label="Close window"
                        on_click=Callback::new(move |_| close())
                    >
                        "\u{00D7}"
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{contents}</WindowBody>
            <Show when=move || !maximized.get() fallback=|| ()>
                {RESIZE_EDGES
                    .into_iter()
                    .map(|edge| {
                        view! {
                            <ResizeHandle
                                edge=resize_edge_token(edge)
                                on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                                    if !is_primary_pointer(&ev) {
                                        return;
                                    }
                                    try_set_pointer_capture(&ev);
                                    ev.prevent_default();
                                    ev.stop_propagation();
                                    runtime
                                        .dispatch_action(DesktopAction::BeginResize {
                                            app_id,
                                            edge,
                                            pointer: pointer_from_pointer_event(&ev),
                                        });
                                })
                            />
                        }
                    })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
}
