use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::marker::PhantomData;
use sudoku_solver::sudoku::board::Board;
use sudoku_solver::sudoku::boards;
use sudoku_solver::sudoku::configs::{
    MaskConfig, MaskMrvConfig, MaskMrvPropagationConfig, NaiveConfig, SetMrvConfig,
};
use sudoku_solver::sudoku::propagation::NoPreprocessing;
use sudoku_solver::sudoku::search::Backtracking;
use sudoku_solver::sudoku::selection::{CellSelection, FixedOrder, MinimumRemaining, RandomOrder};
use sudoku_solver::sudoku::solver::{DefaultConfig, Solver, SolverConfig};
use sudoku_solver::sudoku::state::{ConstraintState, MaskState, SetState};

#[derive(Debug, Clone)]
struct StateConfig<S: ConstraintState>(PhantomData<S>);

impl<S: ConstraintState> SolverConfig for StateConfig<S> {
    type State = S;
    type Selector = MinimumRemaining;
    type Preprocessor = NoPreprocessing;
}

#[derive(Debug, Clone)]
struct SelectorConfig<V: CellSelection>(PhantomData<V>);

impl<V: CellSelection> SolverConfig for SelectorConfig<V> {
    type State = MaskState;
    type Selector = V;
    type Preprocessor = NoPreprocessing;
}

fn solve_board<Config: SolverConfig>(board: Board) {
    let mut solver: Backtracking<Config> = Solver::new(board);
    let solution = solver.solve();
    black_box(solution);
}

fn bench_solvable(c: &mut Criterion) {
    let bench_table = [
        ("easy", boards::EASY),
        ("medium", boards::MEDIUM),
        ("hard", boards::HARD),
        ("extra hard", boards::EXTRA_HARD),
        ("classic", boards::CLASSIC),
        ("empty", boards::EMPTY),
        ("fully solved", boards::SOLVED),
    ];

    let mut group = c.benchmark_group("solvable");
    for (name, board) in &bench_table {
        group.bench_function(*name, |b| {
            b.iter(|| solve_board::<DefaultConfig>(*board));
        });
    }
    group.finish();
}

fn bench_unsolvable(c: &mut Criterion) {
    let bench_table = [
        ("row collision", boards::INVALID_ROW),
        ("col collision", boards::INVALID_COL),
        ("block collision", boards::INVALID_BLOCK),
    ];

    let mut group = c.benchmark_group("unsolvable");
    for (name, board) in &bench_table {
        group.bench_function(*name, |b| {
            b.iter(|| solve_board::<DefaultConfig>(*board));
        });
    }
    group.finish();
}

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("variants - hard board");

    group.bench_function("naive", |b| {
        b.iter(|| solve_board::<NaiveConfig>(boards::HARD));
    });
    group.bench_function("mask", |b| {
        b.iter(|| solve_board::<MaskConfig>(boards::HARD));
    });
    group.bench_function("mask + mrv", |b| {
        b.iter(|| solve_board::<MaskMrvConfig>(boards::HARD));
    });
    group.bench_function("set + mrv", |b| {
        b.iter(|| solve_board::<SetMrvConfig>(boards::HARD));
    });
    group.bench_function("mask + mrv + propagation", |b| {
        b.iter(|| solve_board::<MaskMrvPropagationConfig>(boards::HARD));
    });

    group.finish();
}

fn bench_state_representations(c: &mut Criterion) {
    let mut group = c.benchmark_group("state representation - extra hard board");

    group.bench_function("bitmask state", |b| {
        b.iter(|| solve_board::<StateConfig<MaskState>>(boards::EXTRA_HARD));
    });
    group.bench_function("hash set state", |b| {
        b.iter(|| solve_board::<StateConfig<SetState>>(boards::EXTRA_HARD));
    });

    group.finish();
}

fn bench_selection_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection policy - classic board");

    group.bench_function("minimum remaining values", |b| {
        b.iter(|| solve_board::<SelectorConfig<MinimumRemaining>>(boards::CLASSIC));
    });
    group.bench_function("fixed order", |b| {
        b.iter(|| solve_board::<SelectorConfig<FixedOrder>>(boards::CLASSIC));
    });
    group.bench_function("random order", |b| {
        b.iter(|| solve_board::<SelectorConfig<RandomOrder>>(boards::CLASSIC));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_solvable,
    bench_unsolvable,
    bench_variants,
    bench_state_representations,
    bench_selection_policies
);
criterion_main!(benches);
