use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use choreography::{GlyphSet, ScrambleReveal};
use leptos::*;
use system_ui::prelude::*;

use super::{pointer_from_pointer_event, tray::DesktopTray, window::DesktopWindow};
use crate::model::AppId;
use crate::motion::{self, MotionDriver};
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;

const GREETING_TICK: Duration = Duration::from_millis(40);
const GREETING_NAME_DELAY: Duration = Duration::from_millis(300);
const GREETING_TAG_DELAY: Duration = Duration::from_millis(1200);

#[component]
/// The portfolio desktop: backdrop greeting, icon column, window layer, tray.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let name_line = create_rw_signal(ScrambleReveal::scaled(
        "flavio manyari",
        GlyphSet::Latin,
        GREETING_TICK,
    ));
    let tag_line = create_rw_signal(ScrambleReveal::scaled(
        "code + sound",
        GlyphSet::Latin,
        GREETING_TICK,
    ));

    let drivers: Rc<RefCell<Vec<MotionDriver>>> = Rc::new(RefCell::new(Vec::new()));
    set_timeout(
        {
            let drivers = Rc::clone(&drivers);
            move || drivers.borrow_mut().push(motion::drive(name_line))
        },
        GREETING_NAME_DELAY,
    );
    set_timeout(
        {
            let drivers = Rc::clone(&drivers);
            move || drivers.borrow_mut().push(motion::drive(tag_line))
        },
        GREETING_TAG_DELAY,
    );
    on_cleanup({
        let drivers = Rc::clone(&drivers);
        move || {
            for driver in drivers.borrow_mut().drain(..) {
                driver.cancel();
            }
        }
    });

    // One shared pair of listeners feeds every drag/resize session.
    let pointer_move = window_event_listener(ev::pointermove, move |ev| {
        let session = runtime.interaction.get_untracked();
        if session.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        } else if session.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    });
    let pointer_up = window_event_listener(ev::pointerup, move |_| {
        let session = runtime.interaction.get_untracked();
        if session.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
        if session.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::EndResize);
        }
    });
    on_cleanup(move || {
        pointer_move.remove();
        pointer_up.remove();
    });

    let ordered_apps = move || {
        let state = runtime.state.get();
        let mut apps: Vec<(AppId, u32)> = state
            .windows
            .iter()
            .map(|w| (w.app_id, w.z_index))
            .collect();
        apps.sort_by_key(|(_, z)| *z);
        apps.into_iter().map(|(app, _)| app).collect::<Vec<_>>()
    };

    view! {
        <DesktopRoot id="portfolio-desktop" tabindex=-1>
            <DesktopBackdrop>
                <h1 class="desktop-greeting-name">{move || name_line.get().text()}</h1>
                <p class="desktop-greeting-tag">{move || tag_line.get().text()}</p>
            </DesktopBackdrop>
            <DesktopIconGrid>
                {AppId::ALL
                    .into_iter()
                    .map(|app_id| {
                        view! {
                            <DesktopIconButton
                                title=app_id.title().to_string()
                                aria_label=format!("Open {}", app_id.title())
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::OpenWindow { app_id })
                                })
                            >
                                <span class="desktop-icon-glyph" aria-hidden="true">
                                    {app_id.icon_glyph()}
                                </span>
                                <span class="desktop-icon-label">{app_id.title()}</span>
                            </DesktopIconButton>
                        }
                    })
                    .collect_view()}
            </DesktopIconGrid>
            <DesktopWindowLayer>
                <For each=ordered_apps key=|app_id| *app_id let:app_id>
                    <DesktopWindow app_id />
                </For>
            </DesktopWindowLayer>
            <DesktopTray />
        </DesktopRoot>
    }
}
