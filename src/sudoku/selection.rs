#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::sudoku::board::{Board, Cell, Digit};
use crate::sudoku::candidates::CandidateSet;
use crate::sudoku::state::ConstraintState;
use smallvec::SmallVec;
use std::fmt;

/// A cell to branch on, with its candidate digits in increasing numeric
/// order. The digit list fits inline; branching never allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPoint {
    pub cell: Cell,
    pub digits: SmallVec<[Digit; 9]>,
}

impl BranchPoint {
    #[must_use]
    pub fn new(cell: Cell, candidates: CandidateSet) -> Self {
        Self {
            cell,
            digits: candidates.iter().collect(),
        }
    }
}

/// Outcome of scanning the empty cells for the next branch point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No empty cell remains; the board is solved.
    Complete,
    /// The named cell has no candidates; the current partial assignment
    /// cannot extend to a solution.
    Contradiction(Cell),
    /// Branch on this cell next.
    Branch(BranchPoint),
}

/// Picks the next empty cell to branch on. The policy drives the branching
/// factor of the whole search, which is why selection is the component the
/// solver variants differ on most.
pub trait CellSelection: Clone + fmt::Debug + Default {
    fn select<S: ConstraintState>(&mut self, board: &Board, state: &S) -> Selection;
}

/// Minimum-remaining-values selection: the empty cell with the fewest
/// candidates, ties broken by row-major scan order so solving is
/// deterministic. Short-circuits on a zero-candidate cell (contradiction,
/// nothing further to scan for) and on a single-candidate cell (no other
/// cell can be more constrained).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimumRemaining;

impl CellSelection for MinimumRemaining {
    fn select<S: ConstraintState>(&mut self, board: &Board, state: &S) -> Selection {
        let mut best: Option<(usize, Cell, CandidateSet)> = None;

        for cell in board.empty_cells() {
            let candidates = state.candidates(cell);
            match candidates.len() {
                0 => return Selection::Contradiction(cell),
                1 => return Selection::Branch(BranchPoint::new(cell, candidates)),
                n => {
                    if best.is_none_or(|(m, _, _)| n < m) {
                        best = Some((n, cell, candidates));
                    }
                }
            }
        }

        match best {
            Some((_, cell, candidates)) => Selection::Branch(BranchPoint::new(cell, candidates)),
            None => Selection::Complete,
        }
    }
}

/// The naive policy: the first empty cell in row-major order, whatever its
/// candidate count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedOrder;

impl CellSelection for FixedOrder {
    fn select<S: ConstraintState>(&mut self, board: &Board, state: &S) -> Selection {
        match board.empty_cells().next() {
            None => Selection::Complete,
            Some(cell) => {
                let candidates = state.candidates(cell);
                if candidates.is_empty() {
                    Selection::Contradiction(cell)
                } else {
                    Selection::Branch(BranchPoint::new(cell, candidates))
                }
            }
        }
    }
}

/// A uniformly random empty cell, from a fixed-seed generator. Exists as a
/// benchmark baseline to show what the MRV heuristic buys; the fixed seed
/// keeps runs reproducible.
pub struct RandomOrder {
    rng: fastrand::Rng,
}

impl Default for RandomOrder {
    fn default() -> Self {
        Self {
            rng: fastrand::Rng::with_seed(0x517c_c1b7_2722_0a95),
        }
    }
}

impl Clone for RandomOrder {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl fmt::Debug for RandomOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomOrder").finish_non_exhaustive()
    }
}

impl CellSelection for RandomOrder {
    fn select<S: ConstraintState>(&mut self, board: &Board, state: &S) -> Selection {
        let empty: Vec<Cell> = board.empty_cells().collect();
        if empty.is_empty() {
            return Selection::Complete;
        }
        let cell = empty[self.rng.usize(..empty.len())];
        let candidates = state.candidates(cell);
        if candidates.is_empty() {
            Selection::Contradiction(cell)
        } else {
            Selection::Branch(BranchPoint::new(cell, candidates))
        }
    }
}
