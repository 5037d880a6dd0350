//! Named solver configurations spanning the benchmarked variant space,
//! from the naive port (hash sets, first-empty-cell order, no propagation)
//! to the full bitmask + MRV + propagation pipeline of
//! [`DefaultConfig`](crate::sudoku::solver::DefaultConfig).

use crate::sudoku::propagation::{NakedSingles, NoPreprocessing};
use crate::sudoku::selection::{FixedOrder, MinimumRemaining, RandomOrder};
use crate::sudoku::solver::SolverConfig;
use crate::sudoku::state::{MaskState, SetState};

/// Plain backtracking: set-backed state, row-major cell order, no pre-pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveConfig;

impl SolverConfig for NaiveConfig {
    type State = SetState;
    type Selector = FixedOrder;
    type Preprocessor = NoPreprocessing;
}

/// The naive search order, but with bitmask-backed candidate queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskConfig;

impl SolverConfig for MaskConfig {
    type State = MaskState;
    type Selector = FixedOrder;
    type Preprocessor = NoPreprocessing;
}

/// Bitmask state with MRV selection, no pre-pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskMrvConfig;

impl SolverConfig for MaskMrvConfig {
    type State = MaskState;
    type Selector = MinimumRemaining;
    type Preprocessor = NoPreprocessing;
}

/// Set-backed state with MRV selection. Exists to cross-check the two state
/// representations against each other under the same search order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetMrvConfig;

impl SolverConfig for SetMrvConfig {
    type State = SetState;
    type Selector = MinimumRemaining;
    type Preprocessor = NoPreprocessing;
}

/// Random cell order over bitmask state; the benchmark floor.
#[derive(Debug, Clone, Default)]
pub struct RandomOrderConfig;

impl SolverConfig for RandomOrderConfig {
    type State = MaskState;
    type Selector = RandomOrder;
    type Preprocessor = NoPreprocessing;
}

/// Bitmask state with MRV selection and naked-single propagation, without
/// going through the `DefaultConfig` alias; kept so benches can name the
/// full pipeline alongside the other variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskMrvPropagationConfig;

impl SolverConfig for MaskMrvPropagationConfig {
    type State = MaskState;
    type Selector = MinimumRemaining;
    type Preprocessor = NakedSingles;
}
