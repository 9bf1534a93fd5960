#![deny(missing_docs)]
//! A sudoku solver built on bitmask constraint propagation and
//! backtracking search.
//!
//! Each cell of the 9×9 board is a bitmask of the digits still possible
//! in it. Solving interleaves two moves:
//!
//! 1. **Propagation**: whenever a cell is down to one digit, that digit
//!    is removed from the 20 cells sharing its row, column, or box,
//!    cascading until nothing changes or some cell runs out of digits.
//! 2. **Search**: at a propagation fixed point the open cell with the
//!    fewest remaining digits is picked and each of its digits is tried
//!    on a copy of the board, lowest first.
//!
//! Every accepted solution is re-checked by a validator that knows
//! nothing about propagation. A second, propagation-free engine is kept
//! behind the same interface as an independent cross-check.
//!
//! ```
//! use sudoku_solver::puzzle::parse;
//! use sudoku_solver::solver::engine::{Outcome, Solve, Strategy};
//!
//! let grid = parse::parse_str(
//!     "53..7....\n6..195...\n.98....6.\n8...6...3\n4..8.3..1\n\
//!      7...2...6\n.6....28.\n...419..5\n....8..79\n",
//! )
//! .unwrap();
//!
//! let mut engine = Strategy::Constrained.engine(None);
//! assert!(matches!(engine.solve(&grid), Outcome::Solved(_)));
//! ```

/// Reading puzzle files into boards.
pub mod puzzle;

/// The solving engine: candidate masks, propagation, search, validation.
pub mod solver;
