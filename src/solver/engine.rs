//! Shared surface of the two search engines.
//!
//! Both algorithms take a parsed grid, return an [`Outcome`], and expose
//! [`SearchStats`] for the statistics report. Which one runs is chosen on
//! the command line through [`Strategy`].

use crate::solver::grid::Grid;
use crate::solver::naive::Naive;
use crate::solver::search::Constrained;
use clap::ValueEnum;
use core::fmt;

/// Final result of a completed solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A complete assignment that passed the independent validity check.
    Solved(Grid),
    /// Every branch was exhausted without finding an assignment. An
    /// ordinary outcome, not an error.
    Unsolvable,
    /// The search produced a complete assignment the validator rejected.
    /// Unreachable with a correct propagator; reported loudly rather
    /// than silently accepted or silently backtracked over.
    InvalidSolution(Grid),
    /// The configured node budget ran out before the search finished.
    NodeLimitExceeded,
}

impl Outcome {
    /// Whether this outcome counts as a successful solve.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Counters collected while solving, printed by the `--stats` report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search tree nodes visited.
    pub nodes: usize,
    /// Candidate digits tried at branch points.
    pub decisions: usize,
    /// Candidate eliminations applied by propagation.
    pub propagations: usize,
    /// Branches abandoned after a cell lost its last candidate.
    pub contradictions: usize,
}

/// A search engine: consumes a grid, produces an [`Outcome`].
pub trait Solve {
    /// Search for one complete, valid assignment of `grid`.
    ///
    /// The input grid is never mutated; the engine works on copies.
    fn solve(&mut self, grid: &Grid) -> Outcome;

    /// Counters accumulated by the most recent [`Solve::solve`] call.
    fn stats(&self) -> SearchStats;
}

/// Which algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Constraint propagation plus fewest-candidates backtracking.
    #[default]
    Constrained,
    /// Plain row-major backtracking with no propagation.
    Naive,
}

impl Strategy {
    /// Construct the engine for this strategy. `node_limit` bounds the
    /// number of search nodes visited; `None` means unbounded.
    #[must_use]
    pub fn engine(self, node_limit: Option<usize>) -> Box<dyn Solve> {
        match self {
            Self::Constrained => Box::new(Constrained::new(node_limit)),
            Self::Naive => Box::new(Naive::new(node_limit)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constrained => write!(f, "constrained"),
            Self::Naive => write!(f, "naive"),
        }
    }
}
