#![warn(missing_docs)]
//! This crate provides a 9x9 sudoku solving engine whose variants, from naive
//! backtracking to bitmask-accelerated constraint propagation with
//! most-constrained-cell ordering, share one search written against swappable
//! component traits.

/// The `sudoku` module implements the board representation, the constraint
/// state and candidate evaluation, cell selection, naked-single propagation,
/// and the recursive backtracking search.
pub mod sudoku;
