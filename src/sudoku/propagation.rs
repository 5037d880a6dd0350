#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::sudoku::board::{Board, Cell};
use crate::sudoku::state::{ConstraintState, Contradiction};
use bit_vec::BitVec;
use std::collections::VecDeque;
use std::fmt;

/// A pre-pass run once over the initial board before the recursive search
/// starts. Returns the number of cells it assigned, or a [`Contradiction`]
/// if the board is already unsolvable. Pre-pass edits are not undone; the
/// solver works on its own copy of the board.
pub trait Preprocessor: Clone + fmt::Debug + Default {
    fn preprocess<S: ConstraintState>(
        &mut self,
        board: &mut Board,
        state: &mut S,
    ) -> Result<usize, Contradiction>;
}

/// Resolves naked singles to a fixed point: any empty cell with exactly one
/// candidate is assigned, and each assignment re-examines the still-empty
/// cells of the three affected groups, whose candidate sets may have shrunk.
///
/// The worklist only ever removes candidates, so the pass is monotone and
/// terminates once the queue drains. A pending-flag bit vector keeps a cell
/// from being queued twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NakedSingles;

impl Preprocessor for NakedSingles {
    fn preprocess<S: ConstraintState>(
        &mut self,
        board: &mut Board,
        state: &mut S,
    ) -> Result<usize, Contradiction> {
        let mut queue: VecDeque<Cell> = board.empty_cells().collect();
        let mut pending = BitVec::from_elem(81, false);
        for cell in &queue {
            pending.set(cell.index(), true);
        }

        let mut assigned = 0;
        while let Some(cell) = queue.pop_front() {
            pending.set(cell.index(), false);
            if board.get(cell) != 0 {
                continue;
            }

            let candidates = state.candidates(cell);
            if candidates.is_empty() {
                return Err(Contradiction);
            }
            let Some(digit) = candidates.single() else {
                continue;
            };

            board.set(cell, digit);
            state.place(cell, digit);
            assigned += 1;

            for peer in cell.peers() {
                if board.get(peer) == 0 && pending.get(peer.index()) == Some(false) {
                    queue.push_back(peer);
                    pending.set(peer.index(), true);
                }
            }
        }

        Ok(assigned)
    }
}

/// The null pre-pass: search starts directly on the given clues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPreprocessing;

impl Preprocessor for NoPreprocessing {
    fn preprocess<S: ConstraintState>(
        &mut self,
        _board: &mut Board,
        _state: &mut S,
    ) -> Result<usize, Contradiction> {
        Ok(0)
    }
}
