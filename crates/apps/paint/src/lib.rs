//! Pixel paint program with the classic 16-color palette.

use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;

mod engine;

use engine::{PaintState, Tool, CANVAS_COLS, CANVAS_ROWS, PALETTE};

/// Mounts the paint program into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    let _ = context;
    view! { <PaintApp /> }.into_view()
}

#[component]
fn PaintApp() -> impl IntoView {
    let state = create_rw_signal(PaintState::default());

    // Strokes end wherever the pointer is released, including outside the
    // canvas, so the release listener lives on the window.
    let pointer_up = window_event_listener(ev::pointerup, move |_| {
        state.update(|s| s.pointer_up());
    });
    on_cleanup(move || pointer_up.remove());

    let select_tool = move |tool: Tool| state.update(|s| s.tool = tool);
    let select_color = move |color: u8| state.update(|s| s.color = color);

    view! {
        <AppShell layout_class="app-paint">
            <ToolBar aria_label="Paint tools">
                {Tool::ALL
                    .into_iter()
                    .map(|tool| {
                        view! {
                            <Button
                                ui_slot="paint-tool"
                                title=tool.label()
                                aria_label=tool.label()
                                selected=Signal::derive(move || state.get().tool == tool)
                                on_click=Callback::new(move |_| select_tool(tool))
                            >
                                {tool.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
                <Button
                    ui_slot="paint-clear"
                    aria_label="Clear canvas"
                    on_click=Callback::new(move |_| state.update(|s| s.clear()))
                >
                    "Clear"
                </Button>
            </ToolBar>
            <div
                class="paint-canvas"
                role="img"
                aria-label="Drawing canvas"
                style=format!("--paint-cols: {CANVAS_COLS}; --paint-rows: {CANVAS_ROWS};")
            >
                {(0..CANVAS_COLS * CANVAS_ROWS)
                    .map(|index| paint_cell(state, index))
                    .collect_view()}
            </div>
            <div class="paint-palette" role="group" aria-label="Color palette">
                {(0..PALETTE.len() as u8)
                    .map(|color| {
                        view! {
                            <button
                                type="button"
                                class="paint-swatch"
                                style=format!(
                                    "background-color: {};",
                                    PALETTE[usize::from(color)],
                                )
                                aria-label=format!("Color {color}")
                                data-selected=move || {
                                    if state.get().color == color { "true" } else { "false" }
                                }
                                on:click=move |_| select_color(color)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
            <StatusBar>
                <StatusBarItem>{move || state.get().tool.label()}</StatusBarItem>
                <StatusBarItem>
                    {move || format!("Color {}", PALETTE[usize::from(state.get().color)])}
                </StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}

fn paint_cell(state: RwSignal<PaintState>, index: usize) -> impl IntoView {
    let x = (index % CANVAS_COLS) as i32;
    let y = (index / CANVAS_COLS) as i32;
    view! {
        <div
            class="paint-cell"
            style=move || {
                format!(
                    "background-color: {};",
                    PALETTE[usize::from(state.with(|s| s.visible_color(index)))],
                )
            }
            on:pointerdown=move |ev| {
                ev.prevent_default();
                state.update(|s| s.pointer_down(x, y, &mut rand::thread_rng()));
            }
            on:pointerenter=move |ev| {
                if ev.buttons() & 1 == 1 {
                    state.update(|s| s.pointer_move(x, y, &mut rand::thread_rng()));
                }
            }
        ></div>
    }
}
