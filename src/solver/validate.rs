//! Independent validity checks.
//!
//! These checks know nothing about propagation: they look only at
//! determined digits and the peer relation. They run twice per puzzle —
//! on the raw input, to reject inconsistent clues before any search, and
//! on every complete assignment before it is accepted as a solution.

use crate::solver::cell::peers;
use crate::solver::grid::Grid;

/// Every cell is determined. Says nothing about validity.
#[must_use]
pub fn is_solved(grid: &Grid) -> bool {
    grid.iter().all(|(_, mask)| mask.is_determined())
}

/// No determined digit appears determined in any of its peers. Open and
/// contradictory cells do not participate; an empty mask is the
/// propagator's contradiction signal, not a conflict between digits.
#[must_use]
pub fn is_valid(grid: &Grid) -> bool {
    grid.iter().all(|(index, mask)| match mask.sole_digit() {
        Some(digit) => peers(index)
            .iter()
            .all(|&peer| grid[peer].sole_digit() != Some(digit)),
        None => true,
    })
}
