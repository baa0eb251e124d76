use leptos::*;
use system_ui::prelude::*;

use crate::model::AppId;
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;

#[component]
/// Minimized-window strip along the bottom edge, oldest minimize first.
pub(super) fn DesktopTray() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let entries = move || {
        runtime
            .state
            .get()
            .minimized_windows()
            .into_iter()
            .map(|w| (w.app_id, w.title.clone()))
            .collect::<Vec<(AppId, String)>>()
    };

    view! {
        <TrayList aria_label="Minimized windows">
            <For each=entries key=|entry| entry.0 let:entry>
                <TrayButton
                    title=entry.1.clone()
                    aria_label=format!("Restore {}", entry.1)
                    on_click=Callback::new(move |_| {
                        runtime
                            .dispatch_action(DesktopAction::RestoreWindow {
                                app_id: entry.0,
                            })
                    })
                >
                    <span class="tray-glyph" aria-hidden="true">{entry.0.icon_glyph()}</span>
                    <span class="tray-label">{entry.1.clone()}</span>
                </TrayButton>
            </For>
        </TrayList>
    }
}
