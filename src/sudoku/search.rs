//! The recursive backtracking search engine.
//!
//! This module provides the `Backtracking` struct, a depth-first search over
//! partial boards. The solver is generic over a [`SolverConfig`], so the
//! constraint-state representation, the cell-selection policy and the
//! propagation pre-pass can be swapped without touching the search itself.
//!
//! The core loop at each depth:
//! 1.  **Selection:** ask the configured selector for the next branch point.
//!     "No empty cell" means the board is solved; a zero-candidate cell
//!     means this branch is exhausted.
//! 2.  **Branching:** try each candidate digit of the selected cell in
//!     increasing numeric order: place it, recurse, and on failure unplace
//!     it before trying the next digit.
//! 3.  **Unwinding:** a success propagates straight up without undoing
//!     anything, leaving the board in its solved state. A failure returns
//!     after the last candidate has been unplaced, so the caller sees the
//!     exact state it had before the call.
//!
//! Every placement flows through [`Backtracking::try_digit`], the single
//! point pairing each `place` with its `unplace` on all non-success paths.
//! Recursion depth is bounded by the 81 cells, which is why a plain
//! recursive design (rather than an explicit stack) is appropriate here.

use crate::sudoku::board::{Board, Cell, Digit};
use crate::sudoku::propagation::Preprocessor;
use crate::sudoku::selection::{CellSelection, Selection};
use crate::sudoku::solver::{DefaultConfig, SolveStats, Solver, SolverConfig};
use crate::sudoku::state::ConstraintState;

/// A backtracking solver assembled from the components of `Config`.
///
/// The board and its constraint state form one aggregate owned by the
/// solver; they are mutated strictly together. The caller's grid is
/// unaffected: `Board` is `Copy` and the solver works on its own copy,
/// which also settles what happens to the propagation pre-pass edits on a
/// contradiction (nothing; the working copy is simply dropped).
#[derive(Debug, Clone)]
pub struct Backtracking<Config: SolverConfig = DefaultConfig> {
    /// The working copy of the puzzle, solved in place.
    board: Board,
    /// Used-digit records for the 27 groups. `None` when the given clues
    /// already collide, in which case `solve` reports "no solution"
    /// without searching.
    state: Option<Config::State>,
    /// The cell-selection policy.
    selector: Config::Selector,
    /// The propagation pre-pass.
    preprocessor: Config::Preprocessor,
    /// Search counters.
    stats: SolveStats,
}

impl<Config: SolverConfig> Solver for Backtracking<Config> {
    fn new(board: Board) -> Self {
        Self {
            state: Config::State::build(&board).ok(),
            board,
            selector: Config::Selector::default(),
            preprocessor: Config::Preprocessor::default(),
            stats: SolveStats::default(),
        }
    }

    fn solve(&mut self) -> Option<Board> {
        let state = self.state.as_mut()?;

        match self.preprocessor.preprocess(&mut self.board, state) {
            Ok(assigned) => self.stats.propagations = assigned,
            Err(_) => return None,
        }

        if Self::search(&mut self.board, state, &mut self.selector, &mut self.stats) {
            Some(self.board)
        } else {
            None
        }
    }

    fn stats(&self) -> SolveStats {
        self.stats
    }
}

impl<Config: SolverConfig> Backtracking<Config> {
    /// One level of the depth-first search. Returns `true` once the board
    /// is completely filled; `false` exhausts this depth and leaves board
    /// and state exactly as they were on entry.
    fn search(
        board: &mut Board,
        state: &mut Config::State,
        selector: &mut Config::Selector,
        stats: &mut SolveStats,
    ) -> bool {
        match selector.select(board, state) {
            Selection::Complete => true,
            Selection::Contradiction(_) => false,
            Selection::Branch(branch) => {
                stats.decisions += 1;
                branch
                    .digits
                    .iter()
                    .any(|&digit| Self::try_digit(board, state, selector, stats, branch.cell, digit))
            }
        }
    }

    /// Places `digit` at `cell`, recurses, and unplaces on failure. The
    /// board and the constraint state are updated as one on both edges, so
    /// they cannot drift apart across sibling branches.
    fn try_digit(
        board: &mut Board,
        state: &mut Config::State,
        selector: &mut Config::Selector,
        stats: &mut SolveStats,
        cell: Cell,
        digit: Digit,
    ) -> bool {
        board.set(cell, digit);
        state.place(cell, digit);

        if Self::search(board, state, selector, stats) {
            return true;
        }

        state.unplace(cell, digit);
        board.clear(cell);
        stats.backtracks += 1;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::board::Cell;
    use crate::sudoku::boards;

    fn solve_with<Config: SolverConfig>(board: Board) -> Option<Board> {
        Backtracking::<Config>::new(board).solve()
    }

    #[test]
    fn test_classic_puzzle_has_the_known_solution() {
        let solved = solve_with::<DefaultConfig>(boards::CLASSIC).unwrap();
        assert_eq!(solved, boards::CLASSIC_SOLUTION);
        assert!(solved.is_valid_solution());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let first = solve_with::<DefaultConfig>(boards::HARD);
        let second = solve_with::<DefaultConfig>(boards::HARD);
        assert_eq!(first, second);
        assert!(first.unwrap().is_valid_solution());
    }

    #[test]
    fn test_clues_are_preserved() {
        let solved = solve_with::<DefaultConfig>(boards::EXTRA_HARD).unwrap();
        for cell in Cell::all() {
            let clue = boards::EXTRA_HARD.get(cell);
            if clue != 0 {
                assert_eq!(solved.get(cell), clue);
            }
        }
    }

    #[test]
    fn test_corpus_is_solvable() {
        for board in [
            boards::EASY,
            boards::MEDIUM,
            boards::HARD,
            boards::EXTRA_HARD,
        ] {
            let solved = solve_with::<DefaultConfig>(board).unwrap();
            assert!(solved.is_valid_solution());
        }
    }

    #[test]
    fn test_empty_board_yields_some_valid_grid() {
        let solved = solve_with::<DefaultConfig>(boards::EMPTY).unwrap();
        assert!(solved.is_valid_solution());
    }

    #[test]
    fn test_already_solved_board_is_returned_unchanged() {
        let solved = solve_with::<DefaultConfig>(boards::SOLVED).unwrap();
        assert_eq!(solved, boards::SOLVED);
    }

    #[test]
    fn test_colliding_clues_report_no_solution() {
        assert_eq!(solve_with::<DefaultConfig>(boards::INVALID_ROW), None);
        assert_eq!(solve_with::<DefaultConfig>(boards::INVALID_COL), None);
        assert_eq!(solve_with::<DefaultConfig>(boards::INVALID_BLOCK), None);
    }

    #[test]
    fn test_unsolvable_but_collision_free_board() {
        // No two clues collide, but r1c9 has no candidate left: its row
        // holds 1..=8 and its column holds 9.
        let mut rows = [[0; 9]; 9];
        rows[0] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        rows[1][8] = 9;
        let board = Board::from_2d(rows);
        assert_eq!(solve_with::<DefaultConfig>(board), None);
    }

    #[test]
    fn test_stats_are_collected() {
        let mut solver = Backtracking::<DefaultConfig>::new(boards::HARD);
        solver.solve().unwrap();
        let stats = solver.stats();
        // The hard board is not solved by propagation alone.
        assert!(stats.decisions > 0);
    }
}
