//! Mine field state machine: lazy mine placement, flood fill, chording.

use rand::{Rng, RngCore};

pub(crate) const TIMER_CAP_SECONDS: u32 = 999;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub(crate) const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ];

    pub(crate) fn rows(self) -> usize {
        match self {
            Self::Beginner => 9,
            Self::Intermediate => 16,
            Self::Expert => 16,
        }
    }

    pub(crate) fn cols(self) -> usize {
        match self {
            Self::Beginner => 9,
            Self::Intermediate => 16,
            Self::Expert => 30,
        }
    }

    pub(crate) fn mines(self) -> usize {
        match self {
            Self::Beginner => 10,
            Self::Intermediate => 40,
            Self::Expert => 99,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) mine: bool,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    pub(crate) adjacent: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GameStatus {
    Ready,
    Playing,
    Won,
    Lost,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MinesweeperState {
    pub(crate) difficulty: Difficulty,
    pub(crate) cells: Vec<Cell>,
    pub(crate) status: GameStatus,
    mines_placed: bool,
}

impl MinesweeperState {
    pub(crate) fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            cells: vec![Cell::default(); difficulty.rows() * difficulty.cols()],
            status: GameStatus::Ready,
            mines_placed: false,
        }
    }

    pub(crate) fn flags_remaining(&self) -> i32 {
        let flagged = self.cells.iter().filter(|cell| cell.flagged).count();
        self.difficulty.mines() as i32 - flagged as i32
    }

    pub(crate) fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won | GameStatus::Lost)
    }

    /// Reveals a cell. The first reveal of a game places the mines with the
    /// clicked cell and all of its neighbors kept clear.
    pub(crate) fn reveal(&mut self, index: usize, rng: &mut dyn RngCore) {
        if self.is_over() || index >= self.cells.len() {
            return;
        }
        if self.cells[index].flagged || self.cells[index].revealed {
            return;
        }

        if !self.mines_placed {
            self.place_mines(index, rng);
            self.status = GameStatus::Playing;
        }

        if self.cells[index].mine {
            self.lose();
            return;
        }

        self.flood_reveal(index);
        self.check_win();
    }

    pub(crate) fn toggle_flag(&mut self, index: usize) {
        if self.is_over() || index >= self.cells.len() {
            return;
        }
        let cell = &mut self.cells[index];
        if !cell.revealed {
            cell.flagged = !cell.flagged;
        }
    }

    /// Reveals all unflagged neighbors of a satisfied numbered cell.
    pub(crate) fn chord(&mut self, index: usize, rng: &mut dyn RngCore) {
        if self.is_over() || index >= self.cells.len() {
            return;
        }
        let cell = self.cells[index];
        if !cell.revealed || cell.adjacent == 0 {
            return;
        }
        let flagged = self
            .neighbors(index)
            .filter(|n| self.cells[*n].flagged)
            .count() as u8;
        if flagged != cell.adjacent {
            return;
        }
        let targets: Vec<usize> = self
            .neighbors(index)
            .filter(|n| !self.cells[*n].flagged && !self.cells[*n].revealed)
            .collect();
        for target in targets {
            self.reveal(target, rng);
            if self.is_over() {
                return;
            }
        }
    }

    fn place_mines(&mut self, safe_index: usize, rng: &mut dyn RngCore) {
        let protected: Vec<usize> = std::iter::once(safe_index)
            .chain(self.neighbors(safe_index))
            .collect();
        let mut candidates: Vec<usize> = (0..self.cells.len())
            .filter(|i| !protected.contains(i))
            .collect();

        for _ in 0..self.difficulty.mines().min(candidates.len()) {
            let pick = rng.gen_range(0..candidates.len());
            let index = candidates.swap_remove(pick);
            self.cells[index].mine = true;
        }

        for index in 0..self.cells.len() {
            let count = self.neighbors(index).filter(|n| self.cells[*n].mine).count();
            self.cells[index].adjacent = count as u8;
        }
        self.mines_placed = true;
    }

    fn flood_reveal(&mut self, start: usize) {
        let mut stack = vec![start];
        while let Some(index) = stack.pop() {
            let cell = &mut self.cells[index];
            if cell.revealed || cell.flagged || cell.mine {
                continue;
            }
            cell.revealed = true;
            if cell.adjacent == 0 {
                stack.extend(self.neighbors(index));
            }
        }
    }

    fn lose(&mut self) {
        self.status = GameStatus::Lost;
        for cell in &mut self.cells {
            if cell.mine {
                cell.revealed = true;
            }
        }
    }

    fn check_win(&mut self) {
        let covered = self
            .cells
            .iter()
            .filter(|cell| !cell.revealed && !cell.mine)
            .count();
        if covered == 0 {
            self.status = GameStatus::Won;
            for cell in &mut self.cells {
                if cell.mine {
                    cell.flagged = true;
                }
            }
        }
    }

    pub(crate) fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let cols = self.difficulty.cols() as isize;
        let rows = self.difficulty.rows() as isize;
        let row = index as isize / cols;
        let col = index as isize % cols;
        (-1..=1).flat_map(move |dr| {
            (-1..=1).filter_map(move |dc| {
                if dr == 0 && dc == 0 {
                    return None;
                }
                let (r, c) = (row + dr, col + dc);
                if r < 0 || r >= rows || c < 0 || c >= cols {
                    return None;
                }
                Some((r * cols + c) as usize)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn board_dimensions_match_difficulty() {
        assert_eq!(MinesweeperState::new(Difficulty::Beginner).cells.len(), 81);
        assert_eq!(
            MinesweeperState::new(Difficulty::Intermediate).cells.len(),
            256
        );
        assert_eq!(MinesweeperState::new(Difficulty::Expert).cells.len(), 480);
    }

    #[test]
    fn first_reveal_never_hits_a_mine_nor_its_neighbors() {
        for seed in 0..32 {
            let mut state = MinesweeperState::new(Difficulty::Beginner);
            let clicked = 40;
            state.reveal(clicked, &mut rng(seed));

            assert_eq!(state.status, GameStatus::Playing, "seed {seed}");
            assert!(!state.cells[clicked].mine);
            for n in state.neighbors(clicked).collect::<Vec<_>>() {
                assert!(!state.cells[n].mine, "seed {seed} neighbor {n}");
            }
            let mines = state.cells.iter().filter(|cell| cell.mine).count();
            assert_eq!(mines, 10, "seed {seed}");
        }
    }

    #[test]
    fn first_reveal_opens_the_protected_pocket() {
        let mut state = MinesweeperState::new(Difficulty::Beginner);
        state.reveal(40, &mut rng(7));
        // The clicked cell has no adjacent mines, so the flood opens it and
        // every neighbor at minimum.
        assert!(state.cells[40].revealed);
        assert_eq!(state.cells[40].adjacent, 0);
        for n in state.neighbors(40).collect::<Vec<_>>() {
            assert!(state.cells[n].revealed);
        }
    }

    #[test]
    fn flood_fill_stops_at_numbered_cells() {
        let mut state = MinesweeperState::new(Difficulty::Beginner);
        state.reveal(0, &mut rng(3));
        for (index, cell) in state.cells.iter().enumerate() {
            if cell.revealed && cell.adjacent == 0 {
                for n in state.neighbors(index).collect::<Vec<_>>() {
                    assert!(state.cells[n].revealed, "zero cell {index} neighbor {n}");
                }
            }
        }
    }

    #[test]
    fn flagged_cells_do_not_reveal() {
        let mut state = MinesweeperState::new(Difficulty::Beginner);
        state.reveal(0, &mut rng(1));
        let target = state
            .cells
            .iter()
            .position(|cell| !cell.revealed)
            .expect("some covered cell");
        state.toggle_flag(target);
        state.reveal(target, &mut rng(2));
        assert!(!state.cells[target].revealed);
        state.toggle_flag(target);
        assert!(!state.cells[target].flagged);
    }

    #[test]
    fn flag_counter_tracks_placed_flags() {
        let mut state = MinesweeperState::new(Difficulty::Beginner);
        assert_eq!(state.flags_remaining(), 10);
        state.toggle_flag(0);
        state.toggle_flag(1);
        assert_eq!(state.flags_remaining(), 8);
    }

    #[test]
    fn revealing_a_mine_loses_and_uncovers_the_field() {
        let mut state = MinesweeperState::new(Difficulty::Beginner);
        state.reveal(0, &mut rng(5));
        let mine = state
            .cells
            .iter()
            .position(|cell| cell.mine)
            .expect("mines placed");
        state.reveal(mine, &mut rng(5));
        assert_eq!(state.status, GameStatus::Lost);
        assert!(state
            .cells
            .iter()
            .filter(|cell| cell.mine)
            .all(|cell| cell.revealed));
        // Further input is ignored.
        let covered = state.cells.iter().filter(|cell| !cell.revealed).count();
        state.reveal(1, &mut rng(6));
        assert_eq!(
            state.cells.iter().filter(|cell| !cell.revealed).count(),
            covered
        );
    }

    #[test]
    fn revealing_every_safe_cell_wins() {
        let mut state = MinesweeperState::new(Difficulty::Beginner);
        state.reveal(40, &mut rng(11));
        let safe: Vec<usize> = state
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.mine)
            .map(|(index, _)| index)
            .collect();
        for index in safe {
            state.reveal(index, &mut rng(11));
        }
        assert_eq!(state.status, GameStatus::Won);
        assert!(state
            .cells
            .iter()
            .filter(|cell| cell.mine)
            .all(|cell| cell.flagged));
    }

    #[test]
    fn chord_opens_neighbors_once_flags_satisfy_the_count() {
        let mut state = MinesweeperState::new(Difficulty::Beginner);
        state.reveal(40, &mut rng(13));
        let Some(numbered) = state
            .cells
            .iter()
            .position(|cell| cell.revealed && cell.adjacent > 0)
        else {
            return;
        };
        let mines: Vec<usize> = state
            .neighbors(numbered)
            .filter(|n| state.cells[*n].mine)
            .collect();
        for mine in &mines {
            state.toggle_flag(*mine);
        }
        state.chord(numbered, &mut rng(14));
        assert_ne!(state.status, GameStatus::Lost);
        for n in state.neighbors(numbered).collect::<Vec<_>>() {
            if !state.cells[n].mine {
                assert!(state.cells[n].revealed, "neighbor {n}");
            }
        }
    }
}
