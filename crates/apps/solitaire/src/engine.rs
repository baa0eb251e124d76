//! Klondike rules engine: deal, draw-three stock, and validated moves.

use rand::seq::SliceRandom;
use rand::RngCore;

pub(crate) const FOUNDATION_COUNT: usize = 4;
pub(crate) const TABLEAU_COUNT: usize = 7;
const DRAW_COUNT: usize = 3;
const DECK_SIZE: usize = 52;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub(crate) const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub(crate) fn is_red(self) -> bool {
        matches!(self, Self::Diamonds | Self::Hearts)
    }

    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Clubs => "\u{2663}",
            Self::Diamonds => "\u{2666}",
            Self::Hearts => "\u{2665}",
            Self::Spades => "\u{2660}",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Card {
    pub(crate) suit: Suit,
    /// 1 is the ace, 13 the king.
    pub(crate) rank: u8,
    pub(crate) face_up: bool,
}

impl Card {
    pub(crate) fn rank_label(self) -> &'static str {
        const LABELS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[usize::from(self.rank) - 1]
    }
}

/// Address of one pile on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PileId {
    Stock,
    Waste,
    Foundation(usize),
    Tableau(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SolitaireState {
    pub(crate) stock: Vec<Card>,
    pub(crate) waste: Vec<Card>,
    pub(crate) foundations: [Vec<Card>; FOUNDATION_COUNT],
    pub(crate) tableau: [Vec<Card>; TABLEAU_COUNT],
}

impl SolitaireState {
    /// Shuffles a full deck and deals the seven tableau columns, one card
    /// more per column, only the last card of each face up.
    pub(crate) fn deal(rng: &mut dyn RngCore) -> Self {
        let mut deck: Vec<Card> = Suit::ALL
            .into_iter()
            .flat_map(|suit| {
                (1..=13).map(move |rank| Card {
                    suit,
                    rank,
                    face_up: false,
                })
            })
            .collect();
        deck.shuffle(rng);

        let mut tableau: [Vec<Card>; TABLEAU_COUNT] = Default::default();
        for (column, pile) in tableau.iter_mut().enumerate() {
            for position in 0..=column {
                let mut card = deck.pop().expect("deck holds 52 cards");
                card.face_up = position == column;
                pile.push(card);
            }
        }

        Self {
            stock: deck,
            waste: Vec::new(),
            foundations: Default::default(),
            tableau,
        }
    }

    /// Turns up to three stock cards onto the waste; an empty stock recycles
    /// the waste face down in reverse order instead.
    pub(crate) fn draw(&mut self) {
        if self.stock.is_empty() {
            while let Some(mut card) = self.waste.pop() {
                card.face_up = false;
                self.stock.push(card);
            }
            return;
        }
        for _ in 0..DRAW_COUNT {
            let Some(mut card) = self.stock.pop() else {
                break;
            };
            card.face_up = true;
            self.waste.push(card);
        }
    }

    pub(crate) fn is_won(&self) -> bool {
        self.foundations.iter().map(Vec::len).sum::<usize>() == DECK_SIZE
    }

    /// Cards of `pile` visible to the player, bottom first.
    pub(crate) fn pile(&self, id: PileId) -> &[Card] {
        match id {
            PileId::Stock => &self.stock,
            PileId::Waste => &self.waste,
            PileId::Foundation(i) => &self.foundations[i],
            PileId::Tableau(i) => &self.tableau[i],
        }
    }

    /// Attempts to move the cards of `from` starting at `index` onto `to`.
    /// Returns whether the move was legal and applied.
    pub(crate) fn move_cards(&mut self, from: PileId, index: usize, to: PileId) -> bool {
        if from == to {
            return false;
        }
        let run = match self.movable_run(from, index) {
            Some(run) => run,
            None => return false,
        };

        let accepted = match to {
            PileId::Tableau(column) => {
                run.first().is_some_and(|card| {
                    can_stack_tableau(*card, self.tableau[column].last())
                })
            }
            PileId::Foundation(slot) => {
                run.len() == 1
                    && can_stack_foundation(run[0], self.foundations[slot].last())
            }
            PileId::Stock | PileId::Waste => false,
        };
        if !accepted {
            return false;
        }

        self.detach_run(from, index);
        match to {
            PileId::Tableau(column) => self.tableau[column].extend(run),
            PileId::Foundation(slot) => self.foundations[slot].extend(run),
            PileId::Stock | PileId::Waste => unreachable!(),
        }
        self.flip_exposed(from);
        true
    }

    /// The face-up run a move would carry, or `None` when the selection
    /// cannot be picked up.
    fn movable_run(&self, from: PileId, index: usize) -> Option<Vec<Card>> {
        match from {
            PileId::Waste => {
                let top = *self.waste.last()?;
                (index + 1 == self.waste.len()).then(|| vec![top])
            }
            PileId::Foundation(slot) => {
                let top = *self.foundations[slot].last()?;
                (index + 1 == self.foundations[slot].len()).then(|| vec![top])
            }
            PileId::Tableau(column) => {
                let pile = &self.tableau[column];
                let run = pile.get(index..)?;
                (!run.is_empty() && run.iter().all(|card| card.face_up))
                    .then(|| run.to_vec())
            }
            PileId::Stock => None,
        }
    }

    fn detach_run(&mut self, from: PileId, index: usize) {
        match from {
            PileId::Waste => {
                self.waste.pop();
            }
            PileId::Foundation(slot) => {
                self.foundations[slot].pop();
            }
            PileId::Tableau(column) => {
                self.tableau[column].truncate(index);
            }
            PileId::Stock => {}
        }
    }

    fn flip_exposed(&mut self, from: PileId) {
        if let PileId::Tableau(column) = from {
            if let Some(card) = self.tableau[column].last_mut() {
                card.face_up = true;
            }
        }
    }
}

/// Tableau stacking: kings open empty columns, otherwise alternate colors
/// descending by one.
pub(crate) fn can_stack_tableau(card: Card, onto: Option<&Card>) -> bool {
    match onto {
        None => card.rank == 13,
        Some(top) => {
            top.face_up && top.suit.is_red() != card.suit.is_red() && top.rank == card.rank + 1
        }
    }
}

/// Foundation stacking: aces open empty slots, then same suit ascending.
pub(crate) fn can_stack_foundation(card: Card, onto: Option<&Card>) -> bool {
    match onto {
        None => card.rank == 1,
        Some(top) => top.suit == card.suit && card.rank == top.rank + 1,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn card(suit: Suit, rank: u8, face_up: bool) -> Card {
        Card {
            suit,
            rank,
            face_up,
        }
    }

    fn card_key(card: &Card) -> (Suit, u8) {
        (card.suit, card.rank)
    }

    #[test]
    fn deal_lays_out_seven_columns_with_one_face_up_card_each() {
        let state = SolitaireState::deal(&mut rng(1));
        for (column, pile) in state.tableau.iter().enumerate() {
            assert_eq!(pile.len(), column + 1);
            let face_up = pile.iter().filter(|card| card.face_up).count();
            assert_eq!(face_up, 1, "column {column}");
            assert!(pile.last().expect("non-empty").face_up);
        }
        assert_eq!(state.stock.len(), 24);
        assert!(state.stock.iter().all(|card| !card.face_up));
        assert!(state.waste.is_empty());
    }

    #[test]
    fn deal_uses_every_card_exactly_once() {
        let state = SolitaireState::deal(&mut rng(2));
        let all: Vec<&Card> = state
            .stock
            .iter()
            .chain(state.tableau.iter().flatten())
            .collect();
        assert_eq!(all.len(), 52);
        let distinct: HashSet<(Suit, u8)> = all.iter().map(|c| card_key(c)).collect();
        assert_eq!(distinct.len(), 52);
    }

    #[test]
    fn draw_turns_three_cards_face_up_onto_the_waste() {
        let mut state = SolitaireState::deal(&mut rng(3));
        let before = state.stock.len();
        state.draw();
        assert_eq!(state.stock.len(), before - 3);
        assert_eq!(state.waste.len(), 3);
        assert!(state.waste.iter().all(|card| card.face_up));
        // The card that was on top of the stock ends up on top of the waste.
        let mut replay = SolitaireState::deal(&mut rng(3));
        let expected_top = *replay.stock.last().expect("stock");
        replay.draw();
        assert_eq!(card_key(replay.waste.first().expect("waste")), card_key(&expected_top));
    }

    #[test]
    fn exhausted_stock_recycles_the_waste_in_reverse_face_down() {
        let mut state = SolitaireState::deal(&mut rng(4));
        while !state.stock.is_empty() {
            state.draw();
        }
        let waste_keys: Vec<(Suit, u8)> = state.waste.iter().map(card_key).collect();
        assert_eq!(waste_keys.len(), 24);

        state.draw();
        assert!(state.waste.is_empty());
        assert_eq!(state.stock.len(), 24);
        assert!(state.stock.iter().all(|card| !card.face_up));
        // Recycling reverses the pile: the next draw starts from what was
        // the oldest waste card, and no card is lost or duplicated.
        let stock_pop_order: Vec<(Suit, u8)> = state.stock.iter().rev().map(card_key).collect();
        assert_eq!(stock_pop_order, waste_keys);
    }

    #[test]
    fn tableau_accepts_alternating_colors_descending() {
        let black_ten = card(Suit::Spades, 10, true);
        let red_jack = card(Suit::Hearts, 11, true);
        let black_jack = card(Suit::Clubs, 11, true);
        assert!(can_stack_tableau(black_ten, Some(&red_jack)));
        assert!(!can_stack_tableau(black_ten, Some(&black_jack)));
        assert!(!can_stack_tableau(red_jack, Some(&black_ten)));
    }

    #[test]
    fn only_kings_open_empty_tableau_columns() {
        assert!(can_stack_tableau(card(Suit::Hearts, 13, true), None));
        assert!(!can_stack_tableau(card(Suit::Hearts, 12, true), None));
    }

    #[test]
    fn foundations_start_at_the_ace_and_climb_one_suit() {
        let ace = card(Suit::Diamonds, 1, true);
        let two = card(Suit::Diamonds, 2, true);
        let wrong_suit_two = card(Suit::Clubs, 2, true);
        assert!(can_stack_foundation(ace, None));
        assert!(!can_stack_foundation(two, None));
        assert!(can_stack_foundation(two, Some(&ace)));
        assert!(!can_stack_foundation(wrong_suit_two, Some(&ace)));
    }

    #[test]
    fn moving_a_run_flips_the_exposed_card() {
        let mut state = SolitaireState::deal(&mut rng(5));
        state.tableau[0] = vec![
            card(Suit::Clubs, 9, false),
            card(Suit::Hearts, 5, true),
            card(Suit::Spades, 4, true),
        ];
        state.tableau[1] = vec![card(Suit::Clubs, 6, true)];

        assert!(state.move_cards(PileId::Tableau(0), 1, PileId::Tableau(1)));
        assert_eq!(state.tableau[1].len(), 3);
        assert_eq!(state.tableau[0].len(), 1);
        assert!(state.tableau[0][0].face_up);
    }

    #[test]
    fn face_down_cards_cannot_be_picked_up() {
        let mut state = SolitaireState::deal(&mut rng(6));
        state.tableau[0] = vec![card(Suit::Clubs, 9, false), card(Suit::Hearts, 5, true)];
        state.tableau[1] = vec![card(Suit::Spades, 10, true)];
        assert!(!state.move_cards(PileId::Tableau(0), 0, PileId::Tableau(1)));
    }

    #[test]
    fn only_single_cards_reach_the_foundation() {
        let mut state = SolitaireState::deal(&mut rng(7));
        state.tableau[0] = vec![card(Suit::Hearts, 2, true), card(Suit::Spades, 1, true)];
        state.foundations[0] = vec![card(Suit::Hearts, 1, true)];

        // A two-card run is refused even when its base card would fit.
        assert!(!state.move_cards(PileId::Tableau(0), 0, PileId::Foundation(0)));
        // The top single card moves to an empty slot as an ace.
        assert!(state.move_cards(PileId::Tableau(0), 1, PileId::Foundation(1)));
        assert_eq!(state.foundations[1].len(), 1);
    }

    #[test]
    fn waste_moves_expose_the_next_card() {
        let mut state = SolitaireState::deal(&mut rng(8));
        state.waste = vec![card(Suit::Clubs, 3, true), card(Suit::Diamonds, 1, true)];
        assert!(state.move_cards(PileId::Waste, 1, PileId::Foundation(0)));
        assert_eq!(state.waste.len(), 1);
        assert_eq!(state.foundations[0].len(), 1);
    }

    #[test]
    fn full_foundations_win_the_game() {
        let mut state = SolitaireState::deal(&mut rng(9));
        assert!(!state.is_won());
        for (slot, suit) in Suit::ALL.into_iter().enumerate() {
            state.foundations[slot] = (1..=13).map(|rank| card(suit, rank, true)).collect();
        }
        assert!(state.is_won());
    }
}
