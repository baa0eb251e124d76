//! Table geometry: card positions and the drop-zone registry.
//!
//! Drops are resolved against zones computed from this layout, never against
//! the DOM, so the rules stay testable off-wasm.

use crate::engine::{PileId, SolitaireState, FOUNDATION_COUNT, TABLEAU_COUNT};

pub(crate) const CARD_W: i32 = 60;
pub(crate) const CARD_H: i32 = 84;
pub(crate) const GUTTER: i32 = 12;
pub(crate) const MARGIN: i32 = 8;
/// Vertical offset between fanned tableau cards.
pub(crate) const FAN_OFFSET: i32 = 20;

const UPPER_Y: i32 = MARGIN;
const TABLEAU_Y: i32 = MARGIN + CARD_H + 2 * GUTTER;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Zone {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) w: i32,
    pub(crate) h: i32,
}

impl Zone {
    pub(crate) fn contains(self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

fn column_x(slot: usize) -> i32 {
    MARGIN + slot as i32 * (CARD_W + GUTTER)
}

pub(crate) fn pile_origin(id: PileId) -> (i32, i32) {
    match id {
        PileId::Stock => (column_x(0), UPPER_Y),
        PileId::Waste => (column_x(1), UPPER_Y),
        PileId::Foundation(slot) => (column_x(3 + slot), UPPER_Y),
        PileId::Tableau(column) => (column_x(column), TABLEAU_Y),
    }
}

/// Top-left corner of the card at `index` within its pile.
pub(crate) fn card_position(id: PileId, index: usize) -> (i32, i32) {
    let (x, y) = pile_origin(id);
    match id {
        PileId::Tableau(_) => (x, y + FAN_OFFSET * index as i32),
        _ => (x, y),
    }
}

/// Total table size, for the host element's inline dimensions.
pub(crate) fn table_size(state: &SolitaireState) -> (i32, i32) {
    let deepest = state.tableau.iter().map(Vec::len).max().unwrap_or(0);
    let width = column_x(TABLEAU_COUNT - 1) + CARD_W + MARGIN;
    let height = TABLEAU_Y + FAN_OFFSET * deepest.saturating_sub(1) as i32 + CARD_H + MARGIN;
    (width, height)
}

/// Droppable region per pile. Foundations accept on their card rectangle;
/// a tableau column accepts along its fanned stack plus one card of slack
/// below it.
pub(crate) fn drop_zones(state: &SolitaireState) -> Vec<(PileId, Zone)> {
    let mut zones = Vec::with_capacity(FOUNDATION_COUNT + TABLEAU_COUNT);
    for slot in 0..FOUNDATION_COUNT {
        let id = PileId::Foundation(slot);
        let (x, y) = pile_origin(id);
        zones.push((
            id,
            Zone {
                x,
                y,
                w: CARD_W,
                h: CARD_H,
            },
        ));
    }
    for column in 0..TABLEAU_COUNT {
        let id = PileId::Tableau(column);
        let (x, y) = pile_origin(id);
        let fanned = state.tableau[column].len().saturating_sub(1) as i32 * FAN_OFFSET;
        zones.push((
            id,
            Zone {
                x,
                y,
                w: CARD_W,
                h: fanned + 2 * CARD_H,
            },
        ));
    }
    zones
}

pub(crate) fn zone_at(zones: &[(PileId, Zone)], x: i32, y: i32) -> Option<PileId> {
    zones
        .iter()
        .find(|(_, zone)| zone.contains(x, y))
        .map(|(id, _)| *id)
}
