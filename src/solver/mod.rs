#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The solving engine: candidate masks, propagation, search, validation.

/// Candidate bitmasks and the geometry of the 9×9 board.
pub mod cell;

/// Shared engine surface: strategies, outcomes, statistics.
pub mod engine;

/// The 81-cell board of candidate masks.
pub mod grid;

/// Propagation-free row-major backtracking, kept as a cross-check.
pub mod naive;

/// Worklist elimination of determined digits from peers.
pub mod propagate;

/// Propagation plus fewest-candidates backtracking, the default engine.
pub mod search;

/// Propagation-agnostic validity and completeness checks.
pub mod validate;
