//! # sudoku-solver
//!
//! `sudoku-solver` is a configurable command-line Sudoku solver. It parses
//! the plain-text 9-line board format (`.`/`0` for blanks, `1`–`9` for
//! clues) and solves it with one of several engine variants, from naive
//! backtracking to bitmask-accelerated constraint propagation with
//! most-constrained-cell ordering.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a board file with the default variant
//! sudoku-solver puzzle.sudoku
//!
//! # Solve a board file with the naive variant and print debug info
//! sudoku-solver file --path puzzle.sudoku --solver naive --debug
//!
//! # Solve a board given as text
//! sudoku-solver text --input "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!
//! # Solve every board under a directory and report totals
//! sudoku-solver suite --dir boards/
//!
//! # Generate shell completions
//! sudoku-solver completions bash
//! ```
//!
//! ## Solver variants (`--solver`)
//!
//! -   `default`: bitmask state, MRV selection, naked-single propagation.
//! -   `mrv`: bitmask state, MRV selection, no propagation.
//! -   `mask`: bitmask state, row-major cell order.
//! -   `naive`: hash-set state, row-major cell order.
//! -   `set-mrv`: hash-set state, MRV selection.
//! -   `random`: bitmask state, seeded random cell order.
//!
//! Common options: `-d/--debug`, `-v/--verify` (validate the solved grid),
//! `--stats` (boxed statistics table with memory usage from jemalloc),
//! `-p/--print-solution`.

use clap::{Args, CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use sudoku_solver::sudoku::board::{Board, Cell};
use sudoku_solver::sudoku::configs::{
    MaskConfig, MaskMrvConfig, NaiveConfig, RandomOrderConfig, SetMrvConfig,
};
use sudoku_solver::sudoku::parse;
use sudoku_solver::sudoku::search::Backtracking;
use sudoku_solver::sudoku::solver::{DefaultConfig, SolveStats, Solver, SolverConfig};
use tikv_jemalloc_ctl::{epoch, stats};
use walkdir::WalkDir;

/// Global allocator using `tikv-jemallocator` for performance and memory
/// usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the sudoku solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku-solver", version, about = "A configurable Sudoku solver")]
struct Cli {
    /// An optional path argument. If provided without a subcommand, it's
    /// treated as the path to a board file to solve.
    path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `suite`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands for the sudoku solver.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a board file in the 9-line text format.
    File {
        /// Path to the board file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a board provided as plain text.
    Text {
        /// Board input as a string, either nine 9-cell lines or the
        /// 81-character compact form. `.` and `0` denote blanks.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every board file under a directory and report totals.
    Suite {
        /// Directory to scan recursively for `.sudoku` and `.txt` files.
        #[arg(long)]
        dir: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
struct CommonOptions {
    /// Enable debug output, providing more verbose logging during the
    /// solving process.
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Enable verification of the solved grid (every row, column and block
    /// holds 1..=9 exactly once, and all clues are preserved).
    #[arg(short, long, default_value_t = true)]
    verify: bool,

    /// Enable printing of performance and problem statistics after solving.
    #[arg(long, default_value_t = true)]
    stats: bool,

    /// Enable printing of the solved grid.
    #[arg(short, long, default_value_t = false)]
    print_solution: bool,

    /// Specifies the solver variant to use. One of "default", "mrv",
    /// "mask", "naive", "set-mrv", "random".
    #[arg(short, long, default_value_t = String::from("default"))]
    solver: String,
}

/// Main entry point of the sudoku-solver application.
///
/// Parses command-line arguments, dispatches to the appropriate command
/// handler, and manages the overall execution flow.
fn main() {
    let cli = Cli::parse();

    // Handle the case where a path is provided without a subcommand. This
    // defaults to solving a board file.
    if let Some(path) = cli.path.clone() {
        if cli.command.is_none() {
            let time = Instant::now();
            match parse::parse_file(&path) {
                Ok(board) => {
                    solve_and_report(board, &cli.common, Some(&path), time.elapsed());
                }
                Err(e) => {
                    eprintln!("Error parsing board file: {e}");
                    std::process::exit(1);
                }
            }
            return;
        }
    }

    match cli.command {
        Some(Commands::File { path, common }) => {
            let time = Instant::now();
            match parse::parse_file(&path) {
                Ok(board) => solve_and_report(board, &common, Some(&path), time.elapsed()),
                Err(e) => {
                    eprintln!("Error parsing board file: {e}");
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Text { input, common }) => {
            let time = Instant::now();
            match parse::parse_text(&input) {
                Ok(board) => solve_and_report(board, &common, None, time.elapsed()),
                Err(e) => {
                    eprintln!("Error parsing board text: {e}");
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Suite { dir, common }) => run_suite(&dir, &common),

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "sudoku-solver", &mut std::io::stdout());
        }

        None => {
            // Reached if no subcommand was provided and `cli.path` was also
            // None (a provided path is handled by the first block).
            eprintln!("No command provided. Use --help for more information.");
            std::process::exit(1);
        }
    }
}

/// Solves a board using the named solver variant.
///
/// # Returns
/// A tuple containing:
/// * `Option<Board>`: The solved grid if one exists, otherwise `None`.
/// * `Duration`: The time taken to solve the board.
/// * `SolveStats`: Counters collected during the solving process.
///
/// # Panics
/// Panics if `solver_name` is not one of the documented variant names.
fn solve(
    board: Board,
    debug: bool,
    label: Option<&Path>,
    solver_name: &str,
) -> (Option<Board>, Duration, SolveStats) {
    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }

    if debug {
        println!("Board:\n{board}");
        println!("Clues: {}", board.clue_count());
        println!("Empty cells: {}", 81 - board.clue_count());
    }

    match solver_name.to_lowercase().as_str() {
        "default" | "propagation" => run_solver::<DefaultConfig>(board, debug),
        "mrv" => run_solver::<MaskMrvConfig>(board, debug),
        "mask" => run_solver::<MaskConfig>(board, debug),
        "naive" => run_solver::<NaiveConfig>(board, debug),
        "set-mrv" => run_solver::<SetMrvConfig>(board, debug),
        "random" => run_solver::<RandomOrderConfig>(board, debug),
        _ => panic!("Unknown solver name {solver_name}"),
    }
}

/// Solves a board with a concrete configuration.
///
/// # Returns
/// See the [`solve`] function return type.
fn run_solver<Config: SolverConfig>(
    board: Board,
    debug: bool,
) -> (Option<Board>, Duration, SolveStats) {
    // Advance epoch for jemalloc stats, to isolate memory usage of the
    // solving phase.
    epoch::advance().unwrap();

    let time = Instant::now();

    let mut solver = Backtracking::<Config>::new(board);
    let solution = solver.solve();

    let elapsed = time.elapsed();

    if debug {
        println!("Solution: {solution:?}");
        println!("Time: {elapsed:?}");
    }

    (solution, elapsed, solver.stats())
}

/// Verifies a solved grid against the original board.
///
/// Prints whether the verification was successful. If verification fails,
/// it panics. If `solution` is `None`, there is nothing to verify.
fn verify_solution(original: &Board, solution: Option<&Board>) {
    if let Some(solved) = solution {
        let clues_preserved =
            Cell::all().all(|cell| original.get(cell) == 0 || original.get(cell) == solved.get(cell));
        let ok = solved.is_valid_solution() && clues_preserved;
        println!("Verified: {ok:?}");
        assert!(ok, "Solution failed verification!");
    } else {
        println!("NO SOLUTION");
    }
}

/// Solves a board, then reports results including stats and verification.
///
/// This function is a convenience wrapper around [`solve`],
/// [`verify_solution`] and [`print_stats`].
fn solve_and_report(board: Board, common: &CommonOptions, label: Option<&Path>, parse_time: Duration) {
    let (solution, elapsed, solver_stats) = solve(board, common.debug, label, &common.solver);

    // Advance epoch so the memory stats capture everything up to this point.
    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.verify {
        verify_solution(&board, solution.as_ref());
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            &board,
            &solver_stats,
            allocated_mib,
            resident_mib,
            common.print_solution,
            solution.as_ref(),
        );
    }
}

/// Solves every board file under `dir`, printing one line per board and a
/// summary of totals at the end.
fn run_suite(dir: &Path, common: &CommonOptions) {
    let files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| is_puzzle_file(path))
        .sorted()
        .collect();

    if files.is_empty() {
        eprintln!("No board files found under {}", dir.display());
        std::process::exit(1);
    }

    let mut solved = 0usize;
    let mut unsolvable = 0usize;
    let mut total = Duration::ZERO;

    for path in &files {
        match parse::parse_file(path) {
            Ok(board) => {
                let (solution, elapsed, _) = solve(board, false, None, &common.solver);
                total += elapsed;
                let outcome = if solution.is_some() {
                    solved += 1;
                    "solved"
                } else {
                    unsolvable += 1;
                    "no solution"
                };
                println!("{:>12} {:>12} µs  {}", outcome, elapsed.as_micros(), path.display());
            }
            Err(e) => {
                eprintln!("Skipping {}: {e}", path.display());
            }
        }
    }

    let boards = solved + unsolvable;
    println!(
        "\n{} boards in {} µs ({} solved, {} without solution, {:.1} µs/board)",
        boards,
        total.as_micros(),
        solved,
        unsolvable,
        total.as_micros() as f64 / boards as f64,
    );
}

/// Whether `path` looks like a board file the suite should pick up.
fn is_puzzle_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "sudoku" || ext == "txt")
}

/// Helper function to print a single statistic line in a formatted table
/// row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
#[allow(clippy::too_many_arguments)]
fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    board: &Board,
    s: &SolveStats,
    allocated: f64,
    resident: f64,
    print_solution: bool,
    solution: Option<&Board>,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]========================");
    stat_line("Parse time (s)", format!("{:.6}", parse_time.as_secs_f64()));
    stat_line("Clues", board.clue_count());
    stat_line("Empty cells", 81 - board.clue_count());

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Decisions", s.decisions, elapsed_secs);
    stat_line_with_rate("Propagations", s.propagations, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.6}"));
    println!("=====================================================================");

    if let Some(solved) = solution {
        if print_solution {
            println!("Solution:\n{solved}");
        }
        println!("\nSOLVED");
    } else {
        println!("\nNO SOLUTION");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_file_filter() {
        assert!(is_puzzle_file(Path::new("boards/example-1.sudoku")));
        assert!(is_puzzle_file(Path::new("boards/example-2.txt")));
        assert!(!is_puzzle_file(Path::new("boards/readme.md")));
        assert!(!is_puzzle_file(Path::new("boards/example-1")));
    }

    #[test]
    fn test_verify_accepts_a_correct_solution() {
        use sudoku_solver::sudoku::boards;
        verify_solution(&boards::CLASSIC, Some(&boards::CLASSIC_SOLUTION));
    }

    #[test]
    #[should_panic(expected = "Solution failed verification!")]
    fn test_verify_rejects_a_wrong_solution() {
        use sudoku_solver::sudoku::boards;
        // A valid grid that contradicts the clues of the classic puzzle.
        verify_solution(&boards::CLASSIC, Some(&boards::SOLVED));
    }
}
