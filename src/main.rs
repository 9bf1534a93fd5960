//! Command-line entry point of the sudoku solver.
//!
//! ```sh
//! # Solve puzzles in order, outputs separated by a blank line
//! sudoku-solver easy.sud hard.sud
//!
//! # Solve everything under a directory, with statistics
//! sudoku-solver dir puzzles/ --stats
//!
//! # Cross-check with the propagation-free engine
//! sudoku-solver hard.sud --strategy naive
//! ```
//!
//! The exit status is zero only if every puzzle was solved and the
//! solution passed the final validity check.

use crate::command_line::cli::Cli;
use clap::Parser;
use std::process::ExitCode;

mod command_line;

/// Global allocator, matching the allocator the statistics report reads
/// its memory figures from.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    command_line::cli::run(Cli::parse())
}
