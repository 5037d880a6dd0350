#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::sudoku::board::{Board, Cell, Digit};
use crate::sudoku::candidates::CandidateSet;
use rustc_hash::FxHashSet;
use std::fmt;

/// A reachable dead end: some empty cell has no legal digit left, or the
/// given clues already collide. This is a normal solver outcome, not an
/// error in the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction;

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("contradiction: a cell has no remaining candidates")
    }
}

impl std::error::Error for Contradiction {}

/// Tracks which digits are already used in each of the 27 groups (9 rows,
/// 9 columns, 9 blocks) and answers candidate queries from them.
///
/// The state and the board it was built from share a lifetime: every
/// `place` must be mirrored on the board, and every `unplace` must undo a
/// prior `place` of the same `(cell, digit)` pair. Callers must check
/// `candidates` before placing; placing a digit that is already used in one
/// of the three owning groups corrupts the state silently.
pub trait ConstraintState: Clone + fmt::Debug + Default {
    /// Records `digit` as used in the cell's row, column and block.
    fn place(&mut self, cell: Cell, digit: Digit);

    /// Removes `digit` from the cell's row, column and block. Only valid as
    /// the mirror of a previous `place` with the identical arguments.
    fn unplace(&mut self, cell: Cell, digit: Digit);

    /// The digits not yet used in any of the cell's three groups.
    fn candidates(&self, cell: Cell) -> CandidateSet;

    /// Builds the used-digit records from the pre-filled cells of `board`,
    /// reporting a [`Contradiction`] if two clues collide in a group.
    fn build(board: &Board) -> Result<Self, Contradiction> {
        let mut state = Self::default();
        for cell in Cell::all() {
            let digit = board.get(cell);
            if digit == 0 {
                continue;
            }
            if !state.candidates(cell).contains(digit) {
                return Err(Contradiction);
            }
            state.place(cell, digit);
        }
        Ok(state)
    }
}

/// Bitmask-backed state: one nine-bit mask per group, bit `d - 1` set when
/// digit `d` is used. Candidate queries are three reads, two ORs and a
/// complement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskState {
    rows: [u16; 9],
    cols: [u16; 9],
    blocks: [u16; 9],
}

impl ConstraintState for MaskState {
    fn place(&mut self, cell: Cell, digit: Digit) {
        let mask = 1 << (digit - 1);
        self.rows[cell.row()] |= mask;
        self.cols[cell.col()] |= mask;
        self.blocks[cell.block()] |= mask;
    }

    fn unplace(&mut self, cell: Cell, digit: Digit) {
        let mask = !(1 << (digit - 1));
        self.rows[cell.row()] &= mask;
        self.cols[cell.col()] &= mask;
        self.blocks[cell.block()] &= mask;
    }

    fn candidates(&self, cell: Cell) -> CandidateSet {
        let used = self.rows[cell.row()] | self.cols[cell.col()] | self.blocks[cell.block()];
        CandidateSet::from_mask(!used)
    }
}

/// Hash-set-backed state, the plain representation the bitmask one is
/// benchmarked against. Must produce candidate sets identical to
/// [`MaskState`] for the same placement history.
#[derive(Debug, Clone)]
pub struct SetState {
    rows: [FxHashSet<Digit>; 9],
    cols: [FxHashSet<Digit>; 9],
    blocks: [FxHashSet<Digit>; 9],
}

impl Default for SetState {
    fn default() -> Self {
        Self {
            rows: std::array::from_fn(|_| FxHashSet::default()),
            cols: std::array::from_fn(|_| FxHashSet::default()),
            blocks: std::array::from_fn(|_| FxHashSet::default()),
        }
    }
}

impl ConstraintState for SetState {
    fn place(&mut self, cell: Cell, digit: Digit) {
        self.rows[cell.row()].insert(digit);
        self.cols[cell.col()].insert(digit);
        self.blocks[cell.block()].insert(digit);
    }

    fn unplace(&mut self, cell: Cell, digit: Digit) {
        self.rows[cell.row()].remove(&digit);
        self.cols[cell.col()].remove(&digit);
        self.blocks[cell.block()].remove(&digit);
    }

    fn candidates(&self, cell: Cell) -> CandidateSet {
        let row = &self.rows[cell.row()];
        let col = &self.cols[cell.col()];
        let block = &self.blocks[cell.block()];
        (1..=9)
            .filter(|digit| !row.contains(digit) && !col.contains(digit) && !block.contains(digit))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::boards;

    fn roundtrip<S: ConstraintState>() {
        let mut state = S::default();
        let cell = Cell::new(4, 4);

        assert_eq!(state.candidates(cell), CandidateSet::ALL);

        state.place(cell, 5);
        assert!(!state.candidates(cell).contains(5));
        // 5 is now excluded everywhere in row 5, column 5 and the middle block.
        assert!(!state.candidates(Cell::new(4, 0)).contains(5));
        assert!(!state.candidates(Cell::new(0, 4)).contains(5));
        assert!(!state.candidates(Cell::new(3, 3)).contains(5));
        // An unrelated cell is unaffected.
        assert_eq!(state.candidates(Cell::new(0, 0)), CandidateSet::ALL);

        state.unplace(cell, 5);
        assert_eq!(state.candidates(cell), CandidateSet::ALL);
    }

    #[test]
    fn test_mask_place_unplace_roundtrip() {
        roundtrip::<MaskState>();
    }

    #[test]
    fn test_set_place_unplace_roundtrip() {
        roundtrip::<SetState>();
    }

    #[test]
    fn test_build_from_clues() {
        let state = MaskState::build(&boards::CLASSIC).unwrap();
        // r1c3 sees 5, 3 and 7 in its row, 8 in its column, and 6 and 9 in
        // its block.
        let candidates = state.candidates(Cell::new(0, 2));
        assert!(!candidates.contains(5));
        assert!(!candidates.contains(3));
        assert!(!candidates.contains(6));
        assert!(!candidates.contains(9));
        assert!(!candidates.contains(8));
        assert!(candidates.contains(1));
    }

    #[test]
    fn test_build_rejects_row_collision() {
        assert_eq!(MaskState::build(&boards::INVALID_ROW), Err(Contradiction));
        assert!(SetState::build(&boards::INVALID_ROW).is_err());
    }

    #[test]
    fn test_build_rejects_col_collision() {
        assert_eq!(MaskState::build(&boards::INVALID_COL), Err(Contradiction));
    }

    #[test]
    fn test_build_rejects_block_collision() {
        assert_eq!(MaskState::build(&boards::INVALID_BLOCK), Err(Contradiction));
    }

    fn assert_equivalent(mask: &MaskState, set: &SetState) {
        for cell in Cell::all() {
            assert_eq!(
                mask.candidates(cell),
                set.candidates(cell),
                "candidate sets diverge at {cell:?}"
            );
        }
    }

    #[test]
    fn test_mask_and_set_agree_at_every_step() {
        let mut mask = MaskState::build(&boards::CLASSIC).unwrap();
        let mut set = SetState::build(&boards::CLASSIC).unwrap();
        assert_equivalent(&mask, &set);

        // Walk a scripted place/unplace sequence and cross-check after every
        // mutation, mimicking a search path with backtracking.
        let script = [
            (Cell::new(0, 2), 4),
            (Cell::new(0, 3), 6),
            (Cell::new(2, 0), 1),
            (Cell::new(8, 0), 3),
        ];
        for &(cell, digit) in &script {
            assert!(mask.candidates(cell).contains(digit));
            mask.place(cell, digit);
            set.place(cell, digit);
            assert_equivalent(&mask, &set);
        }
        for &(cell, digit) in script.iter().rev() {
            mask.unplace(cell, digit);
            set.unplace(cell, digit);
            assert_equivalent(&mask, &set);
        }

        assert_equivalent(&mask, &set);
    }
}
