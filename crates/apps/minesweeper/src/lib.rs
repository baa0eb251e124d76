//! Mine-hunting grid game.

use std::time::Duration;

use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;

mod engine;

use engine::{Cell, Difficulty, GameStatus, MinesweeperState, TIMER_CAP_SECONDS};

/// Mounts the minesweeper game into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    let _ = context;
    view! { <MinesweeperApp /> }.into_view()
}

#[component]
fn MinesweeperApp() -> impl IntoView {
    let game = create_rw_signal(MinesweeperState::new(Difficulty::Beginner));
    let elapsed = create_rw_signal(0u32);

    let timer = set_interval_with_handle(
        move || {
            if game.with_untracked(|state| state.status == GameStatus::Playing) {
                elapsed.update(|t| *t = (*t + 1).min(TIMER_CAP_SECONDS));
            }
        },
        Duration::from_secs(1),
    )
    .ok();
    on_cleanup(move || {
        if let Some(timer) = timer {
            timer.clear();
        }
    });

    let restart = move |difficulty: Difficulty| {
        game.set(MinesweeperState::new(difficulty));
        elapsed.set(0);
    };

    let status_face = move || match game.get().status {
        GameStatus::Won => "\u{1F60E}",
        GameStatus::Lost => "\u{2639}",
        _ => "\u{1F642}",
    };

    let cols = move || game.get().difficulty.cols();

    view! {
        <AppShell layout_class="app-minesweeper">
            <ToolBar aria_label="Game controls">
                {Difficulty::ALL
                    .into_iter()
                    .map(|difficulty| {
                        view! {
                            <Button
                                ui_slot="mine-difficulty"
                                selected=Signal::derive(move || {
                                    game.get().difficulty == difficulty
                                })
                                on_click=Callback::new(move |_| restart(difficulty))
                            >
                                {difficulty.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </ToolBar>
            <GroupFrame layout_class="mine-scoreboard" ui_slot="mine-scoreboard">
                <span class="mine-counter" role="status" aria-label="Flags remaining">
                    {move || format!("{:03}", game.get().flags_remaining().clamp(-99, 999))}
                </span>
                <Button
                    ui_slot="mine-reset"
                    aria_label="New game"
                    on_click=Callback::new(move |_| {
                        restart(game.get_untracked().difficulty)
                    })
                >
                    {status_face}
                </Button>
                <span class="mine-counter" role="status" aria-label="Elapsed seconds">
                    {move || format!("{:03}", elapsed.get())}
                </span>
            </GroupFrame>
            <div
                class="mine-field"
                role="grid"
                aria-label="Mine field"
                style=move || format!("--mine-cols: {};", cols())
            >
                {move || {
                    let state = game.get();
                    state
                        .cells
                        .iter()
                        .enumerate()
                        .map(|(index, cell)| mine_cell(game, index, *cell))
                        .collect_view()
                }}
            </div>
        </AppShell>
    }
}

fn mine_cell(game: RwSignal<MinesweeperState>, index: usize, cell: Cell) -> impl IntoView {
    let label = if cell.revealed {
        if cell.mine {
            "*".to_string()
        } else if cell.adjacent > 0 {
            cell.adjacent.to_string()
        } else {
            String::new()
        }
    } else if cell.flagged {
        "\u{2691}".to_string()
    } else {
        String::new()
    };

    view! {
        <button
            type="button"
            class="mine-cell"
            data-revealed=if cell.revealed { "true" } else { "false" }
            data-flagged=if cell.flagged { "true" } else { "false" }
            data-mine=if cell.revealed && cell.mine { "true" } else { "false" }
            data-adjacent=cell.adjacent.to_string()
            on:click=move |_| {
                game.update(|state| state.reveal(index, &mut rand::thread_rng()));
            }
            on:dblclick=move |_| {
                game.update(|state| state.chord(index, &mut rand::thread_rng()));
            }
            on:contextmenu=move |ev| {
                ev.prevent_default();
                game.update(|state| state.toggle_flag(index));
            }
        >
            {label}
        </button>
    }
}
