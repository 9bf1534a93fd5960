//! Plain backtracking without propagation.
//!
//! Walks the open cells in row-major order, incrementing each cell's
//! digit and checking the row, column, and box locally; steps back when a
//! cell exhausts digit 9. Far slower than the constrained engine on hard
//! puzzles but useful as an independent cross-check, so it stays
//! available behind the strategy flag.

use crate::solver::cell::{CELL_COUNT, CellIx, peers};
use crate::solver::engine::{Outcome, SearchStats, Solve};
use crate::solver::grid::Grid;
use crate::solver::validate;

/// The propagation-free engine.
#[derive(Debug, Clone, Default)]
pub struct Naive {
    node_limit: Option<usize>,
    stats: SearchStats,
}

impl Naive {
    /// A new engine. `node_limit` caps the digit assignments attempted,
    /// `None` leaves the search unbounded.
    #[must_use]
    pub fn new(node_limit: Option<usize>) -> Self {
        Self {
            node_limit,
            stats: SearchStats::default(),
        }
    }
}

impl Solve for Naive {
    fn solve(&mut self, grid: &Grid) -> Outcome {
        self.stats = SearchStats::default();

        if !validate::is_valid(grid) {
            return Outcome::Unsolvable;
        }

        let mut digits = grid.to_digits();
        let fixed: Vec<bool> = digits.iter().map(|&d| d > 0).collect();

        // First open cell; a grid made entirely of clues is already a
        // candidate solution.
        let Some(mut cur) = next_open(&fixed, None) else {
            return accept(&digits);
        };

        loop {
            self.stats.nodes += 1;
            if self.node_limit.is_some_and(|limit| self.stats.nodes > limit) {
                return Outcome::NodeLimitExceeded;
            }

            digits[cur] += 1;
            if digits[cur] > 9 {
                digits[cur] = 0;
                match prev_open(&fixed, cur) {
                    Some(back) => {
                        self.stats.contradictions += 1;
                        cur = back;
                    }
                    // Backed off the first open cell: nothing left to try.
                    None => return Outcome::Unsolvable,
                }
                continue;
            }

            self.stats.decisions += 1;
            if cell_fits(&digits, cur) {
                match next_open(&fixed, Some(cur)) {
                    Some(next) => cur = next,
                    None => return accept(&digits),
                }
            }
        }
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Validator gate on a filled digit array.
fn accept(digits: &[u8; CELL_COUNT]) -> Outcome {
    let grid = to_grid(digits);
    if validate::is_solved(&grid) && validate::is_valid(&grid) {
        Outcome::Solved(grid)
    } else {
        Outcome::InvalidSolution(grid)
    }
}

fn to_grid(digits: &[u8; CELL_COUNT]) -> Grid {
    let mut rows = [[0; 9]; 9];
    for (index, &digit) in digits.iter().enumerate() {
        rows[index / 9][index % 9] = digit;
    }
    Grid::from_digits(&rows)
}

/// The digit at `index` conflicts with none of its peers.
fn cell_fits(digits: &[u8; CELL_COUNT], index: CellIx) -> bool {
    let digit = digits[index];
    peers(index).iter().all(|&peer| digits[peer] != digit)
}

/// Next non-clue cell after `from` in row-major order; `None` past the
/// end. `from: None` starts at the beginning.
fn next_open(fixed: &[bool], from: Option<CellIx>) -> Option<CellIx> {
    let start = from.map_or(0, |i| i + 1);
    (start..fixed.len()).find(|&i| !fixed[i])
}

/// Previous non-clue cell before `from`; `None` before the start.
fn prev_open(fixed: &[bool], from: CellIx) -> Option<CellIx> {
    (0..from).rev().find(|&i| !fixed[i])
}
