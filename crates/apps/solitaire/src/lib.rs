//! Klondike solitaire, draw-three rules, drag-and-drop play.

use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;

mod engine;
mod layout;

use engine::{Card, PileId, SolitaireState, FOUNDATION_COUNT, TABLEAU_COUNT};
use layout::{card_position, drop_zones, pile_origin, table_size, zone_at, CARD_H, CARD_W};

#[derive(Clone, Copy, PartialEq, Eq)]
struct DragSession {
    from: PileId,
    index: usize,
    origin: (i32, i32),
    pointer: (i32, i32),
}

/// Mounts the solitaire game into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    let _ = context;
    view! { <SolitaireApp /> }.into_view()
}

#[component]
fn SolitaireApp() -> impl IntoView {
    let game = create_rw_signal(SolitaireState::deal(&mut rand::thread_rng()));
    let drag = create_rw_signal(None::<DragSession>);
    let table = create_node_ref::<html::Div>();

    let new_game = move || {
        game.set(SolitaireState::deal(&mut rand::thread_rng()));
        drag.set(None);
    };

    let pointer_move = window_event_listener(ev::pointermove, move |ev| {
        if drag.get_untracked().is_some() {
            drag.update(|session| {
                if let Some(session) = session.as_mut() {
                    session.pointer = (ev.client_x(), ev.client_y());
                }
            });
        }
    });
    // Drops resolve against the geometric zone registry, not the DOM.
    let pointer_up = window_event_listener(ev::pointerup, move |ev| {
        let Some(session) = drag.get_untracked() else {
            return;
        };
        drag.set(None);
        let Some(host) = table.get_untracked() else {
            return;
        };
        let rect = host.get_bounding_client_rect();
        let x = ev.client_x() - rect.left() as i32;
        let y = ev.client_y() - rect.top() as i32;
        let target = game.with_untracked(|state| zone_at(&drop_zones(state), x, y));
        if let Some(target) = target {
            game.update(|state| {
                state.move_cards(session.from, session.index, target);
            });
        }
    });
    on_cleanup(move || {
        pointer_move.remove();
        pointer_up.remove();
    });

    let begin_drag = move |pile: PileId, index: usize, ev: &ev::PointerEvent| {
        let pickable = game.with_untracked(|state| {
            let cards = state.pile(pile);
            let top_only = matches!(pile, PileId::Waste | PileId::Foundation(_));
            cards.get(index).is_some_and(|card| card.face_up)
                && (!top_only || index + 1 == cards.len())
        });
        if pickable {
            ev.prevent_default();
            let at = (ev.client_x(), ev.client_y());
            drag.set(Some(DragSession {
                from: pile,
                index,
                origin: at,
                pointer: at,
            }));
        }
    };

    let table_style = move || {
        let (w, h) = game.with(|state| table_size(state));
        format!("width: {w}px; height: {h}px;")
    };

    view! {
        <AppShell layout_class="app-solitaire">
            <ToolBar aria_label="Game controls">
                <Button ui_slot="solitaire-new" on_click=Callback::new(move |_| new_game())>
                    "New game"
                </Button>
                <Show when=move || game.get().is_won() fallback=|| ()>
                    <span class="solitaire-won" role="status">"You won!"</span>
                </Show>
            </ToolBar>
            <div class="solitaire-table" node_ref=table style=table_style>
                <PileSlots />
                <button
                    type="button"
                    class="card-stock"
                    aria-label="Draw from stock"
                    style=slot_style(pile_origin(PileId::Stock))
                    data-empty=move || {
                        if game.get().stock.is_empty() { "true" } else { "false" }
                    }
                    on:click=move |_| game.update(|state| state.draw())
                >
                    {move || {
                        let remaining = game.get().stock.len();
                        if remaining == 0 { "\u{21BA}".to_string() } else { format!("{remaining}") }
                    }}
                </button>
                {move || {
                    let state = game.get();
                    let session = drag.get();
                    let mut cards = Vec::new();
                    if let Some(card) = state.waste.last() {
                        let index = state.waste.len() - 1;
                        cards.push(card_view(*card, PileId::Waste, index, session, begin_drag));
                    }
                    for slot in 0..FOUNDATION_COUNT {
                        if let Some(card) = state.foundations[slot].last() {
                            let pile = PileId::Foundation(slot);
                            let index = state.foundations[slot].len() - 1;
                            cards.push(card_view(*card, pile, index, session, begin_drag));
                        }
                    }
                    for column in 0..TABLEAU_COUNT {
                        let pile = PileId::Tableau(column);
                        for (index, card) in state.tableau[column].iter().enumerate() {
                            cards.push(card_view(*card, pile, index, session, begin_drag));
                        }
                    }
                    cards.collect_view()
                }}
            </div>
        </AppShell>
    }
}

/// Empty-pile outlines drawn underneath the cards.
#[component]
fn PileSlots() -> impl IntoView {
    let slots = std::iter::once(pile_origin(PileId::Waste))
        .chain((0..FOUNDATION_COUNT).map(|slot| pile_origin(PileId::Foundation(slot))))
        .chain((0..TABLEAU_COUNT).map(|column| pile_origin(PileId::Tableau(column))));
    slots
        .map(|origin| {
            view! { <div class="card-slot" aria-hidden="true" style=slot_style(origin)></div> }
        })
        .collect_view()
}

fn slot_style((x, y): (i32, i32)) -> String {
    format!("left: {x}px; top: {y}px; width: {CARD_W}px; height: {CARD_H}px;")
}

fn card_view(
    card: Card,
    pile: PileId,
    index: usize,
    session: Option<DragSession>,
    begin_drag: impl Fn(PileId, usize, &ev::PointerEvent) + Copy + 'static,
) -> impl IntoView {
    let (x, y) = card_position(pile, index);
    let dragging = session.is_some_and(|s| s.from == pile && index >= s.index);
    let style = if let (true, Some(s)) = (dragging, session) {
        let (dx, dy) = (s.pointer.0 - s.origin.0, s.pointer.1 - s.origin.1);
        format!(
            "left: {x}px; top: {y}px; width: {CARD_W}px; height: {CARD_H}px; \
             transform: translate({dx}px, {dy}px); z-index: 10;"
        )
    } else {
        format!("left: {x}px; top: {y}px; width: {CARD_W}px; height: {CARD_H}px;")
    };
    let label = if card.face_up {
        format!("{}{}", card.rank_label(), card.suit.symbol())
    } else {
        String::new()
    };
    view! {
        <div
            class="playing-card"
            style=style
            data-face-up=if card.face_up { "true" } else { "false" }
            data-red=if card.suit.is_red() { "true" } else { "false" }
            data-dragging=if dragging { "true" } else { "false" }
            aria-label=if card.face_up {
                format!("{} of {:?}", card.rank_label(), card.suit)
            } else {
                "Face-down card".to_string()
            }
            on:pointerdown=move |ev| begin_drag(pile, index, &ev)
        >
            {label}
        </div>
    }
}
