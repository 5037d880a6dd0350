use crate::sudoku::board::Board;
use crate::sudoku::propagation::{NakedSingles, Preprocessor};
use crate::sudoku::selection::{CellSelection, MinimumRemaining};
use crate::sudoku::state::{ConstraintState, MaskState};

/// Selects the concrete components a solver instance is assembled from.
/// Variants differ only in these three axes; the search itself is written
/// once against the traits.
pub trait SolverConfig {
    type State: ConstraintState;
    type Selector: CellSelection;
    type Preprocessor: Preprocessor;
}

/// The fastest variant: bitmask state, minimum-remaining-values selection,
/// naked-single propagation before search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultConfig;

impl SolverConfig for DefaultConfig {
    type State = MaskState;
    type Selector = MinimumRemaining;
    type Preprocessor = NakedSingles;
}

/// Counters collected while solving a single board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Branch points entered by the search.
    pub decisions: usize,
    /// Forced assignments made by the pre-pass.
    pub propagations: usize,
    /// Placements undone after a failed branch.
    pub backtracks: usize,
}

pub trait Solver {
    /// Builds a solver owning its working copy of `board`.
    fn new(board: Board) -> Self;

    /// Runs the search to completion. `Some` holds the solved grid; `None`
    /// means the board has no solution. "No solution" is a normal outcome,
    /// never an error.
    fn solve(&mut self) -> Option<Board>;

    /// Counters from the most recent [`solve`](Solver::solve) call.
    fn stats(&self) -> SolveStats;
}
