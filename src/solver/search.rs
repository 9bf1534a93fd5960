//! Backtracking search over propagated grids.
//!
//! The engine brings the grid to a propagation fixed point, then picks
//! the open cell with the fewest remaining candidates and tries each of
//! its digits in ascending order. Every branch works on its own copy of
//! the grid, so backtracking is simply dropping the copy; propagation
//! after a guess is seeded from the guessed cell alone.
//!
//! Cell selection scans row-major and keeps the first cell with the
//! lowest candidate count, stopping early at a two-candidate cell since
//! nothing smaller can exist. Together with the ascending digit order
//! this pins the entire search order: the same input always produces the
//! same solution, and for puzzles with several solutions the first one
//! in this fixed order is returned.

use crate::solver::cell::{CELL_COUNT, Candidates, CellIx};
use crate::solver::engine::{Outcome, SearchStats, Solve};
use crate::solver::grid::Grid;
use crate::solver::propagate::{Contradiction, propagate};
use crate::solver::validate;

/// The propagation-driven engine. This is the default strategy.
#[derive(Debug, Clone, Default)]
pub struct Constrained {
    node_limit: Option<usize>,
    stats: SearchStats,
}

/// Reasons to abandon the whole search rather than one branch.
enum Abort {
    /// A complete assignment failed the validator. Carries the grid so
    /// the driver can show what was produced.
    InvalidSolution(Grid),
    /// The node budget ran out.
    NodeLimit,
}

impl Constrained {
    /// A new engine. `node_limit` caps the search nodes visited, `None`
    /// leaves the search unbounded.
    #[must_use]
    pub fn new(node_limit: Option<usize>) -> Self {
        Self {
            node_limit,
            stats: SearchStats::default(),
        }
    }

    fn search(&mut self, grid: Grid) -> Result<Option<Grid>, Abort> {
        self.stats.nodes += 1;
        if self.node_limit.is_some_and(|limit| self.stats.nodes > limit) {
            return Err(Abort::NodeLimit);
        }

        let Some(index) = most_constrained_cell(&grid) else {
            // No open cell left: a candidate solution. Propagation only
            // guarantees local consistency, so gate through the
            // independent validator before accepting.
            return if validate::is_solved(&grid) && validate::is_valid(&grid) {
                Ok(Some(grid))
            } else {
                Err(Abort::InvalidSolution(grid))
            };
        };

        for digit in grid[index].digits() {
            self.stats.decisions += 1;

            let mut branch = grid.clone();
            branch[index] = Candidates::of_digit(digit);
            match propagate(&mut branch, Some(index)) {
                Ok(eliminated) => self.stats.propagations += eliminated,
                Err(Contradiction) => {
                    self.stats.contradictions += 1;
                    continue;
                }
            }

            if let Some(solved) = self.search(branch)? {
                return Ok(Some(solved));
            }
        }

        Ok(None)
    }
}

impl Solve for Constrained {
    fn solve(&mut self, grid: &Grid) -> Outcome {
        self.stats = SearchStats::default();

        // Inconsistent clues never admit a completion; reject them
        // before spending any search effort.
        if !validate::is_valid(grid) {
            return Outcome::Unsolvable;
        }

        let mut work = grid.clone();
        match propagate(&mut work, None) {
            Ok(eliminated) => self.stats.propagations += eliminated,
            Err(Contradiction) => {
                self.stats.contradictions += 1;
                return Outcome::Unsolvable;
            }
        }

        match self.search(work) {
            Ok(Some(solved)) => Outcome::Solved(solved),
            Ok(None) => Outcome::Unsolvable,
            Err(Abort::InvalidSolution(grid)) => Outcome::InvalidSolution(grid),
            Err(Abort::NodeLimit) => Outcome::NodeLimitExceeded,
        }
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// The open cell with the fewest candidates, scanning row-major and
/// stopping at the first two-candidate cell. `None` when every cell is
/// determined (or contradictory, which the caller's validator gate
/// rejects).
fn most_constrained_cell(grid: &Grid) -> Option<CellIx> {
    let mut best: Option<(CellIx, u32)> = None;

    for index in 0..CELL_COUNT {
        let count = grid[index].count();
        if count <= 1 {
            continue;
        }
        if count == 2 {
            return Some(index);
        }
        if best.is_none_or(|(_, best_count)| count < best_count) {
            best = Some((index, count));
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::cell::cell_at;
    use crate::solver::grid::EXAMPLE;

    const EXAMPLE_SOLUTION: &str = "\
534 678 912
672 195 348
198 342 567

859 761 423
426 853 791
713 924 856

961 537 284
287 419 635
345 286 179";

    fn solve(grid: &Grid) -> Outcome {
        Constrained::new(None).solve(grid)
    }

    #[test]
    fn test_solves_example_to_known_solution() {
        let grid = Grid::from_digits(&EXAMPLE);
        match solve(&grid) {
            Outcome::Solved(solution) => {
                assert_eq!(solution.to_string(), EXAMPLE_SOLUTION);
            }
            other => panic!("expected a solution, got {other:?}"),
        }
    }

    #[test]
    fn test_solution_respects_clues() {
        let grid = Grid::from_digits(&EXAMPLE);
        let Outcome::Solved(solution) = solve(&grid) else {
            panic!("example must solve");
        };

        for (index, mask) in grid.iter() {
            if let Some(digit) = mask.sole_digit() {
                assert_eq!(solution[index].sole_digit(), Some(digit));
            }
        }
    }

    #[test]
    fn test_solved_grid_is_valid_and_complete() {
        let Outcome::Solved(solution) = solve(&Grid::from_digits(&EXAMPLE)) else {
            panic!("example must solve");
        };
        assert!(validate::is_solved(&solution));
        assert!(validate::is_valid(&solution));
    }

    #[test]
    fn test_solution_survives_print_and_reparse() {
        let Outcome::Solved(solution) = solve(&Grid::from_digits(&EXAMPLE)) else {
            panic!("example must solve");
        };
        let reparsed = crate::puzzle::parse::parse_str(&solution.to_string()).unwrap();
        assert_eq!(reparsed, solution);
    }

    #[test]
    fn test_blank_grid_solves() {
        match solve(&Grid::empty()) {
            Outcome::Solved(solution) => {
                assert!(validate::is_solved(&solution));
                assert!(validate::is_valid(&solution));
            }
            other => panic!("blank grid must admit a solution, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_clue_is_unsolvable() {
        let mut grid = Grid::empty();
        grid[cell_at(0, 1)] = Candidates::of_digit(5);
        grid[cell_at(0, 6)] = Candidates::of_digit(5);

        assert_eq!(solve(&grid), Outcome::Unsolvable);
    }

    #[test]
    fn test_deterministic() {
        let grid = Grid::empty();
        let first = solve(&grid);
        let second = solve(&grid);
        assert_eq!(first, second);

        let (Outcome::Solved(a), Outcome::Solved(b)) = (first, second) else {
            panic!("blank grid must solve");
        };
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_node_limit_aborts() {
        // One node is never enough for a blank grid.
        let mut engine = Constrained::new(Some(1));
        assert_eq!(engine.solve(&Grid::empty()), Outcome::NodeLimitExceeded);
    }

    #[test]
    fn test_stats_are_collected() {
        let mut engine = Constrained::new(None);
        let outcome = engine.solve(&Grid::from_digits(&EXAMPLE));
        assert!(outcome.is_solved());

        let stats = engine.stats();
        assert!(stats.nodes >= 1);
        assert!(stats.propagations > 0);
    }

    #[test]
    fn test_stats_reset_between_solves() {
        let mut engine = Constrained::new(None);
        engine.solve(&Grid::from_digits(&EXAMPLE));
        let first = engine.stats();
        engine.solve(&Grid::from_digits(&EXAMPLE));
        assert_eq!(engine.stats(), first);
    }

    #[test]
    fn test_most_constrained_prefers_fewest() {
        let mut grid = Grid::from_digits(&EXAMPLE);
        propagate(&mut grid, None).unwrap();

        if let Some(index) = most_constrained_cell(&grid) {
            let chosen = grid[index].count();
            for (_, mask) in grid.iter() {
                if mask.count() > 1 {
                    assert!(chosen <= mask.count());
                }
            }
        }
    }
}
