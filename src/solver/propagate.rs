#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Constraint propagation over naked singles.
//!
//! Whenever a cell is determined, its digit can no longer appear in any
//! of its 20 peers. Removing it may determine further cells, so the
//! eliminations cascade through a worklist until nothing changes or a
//! cell runs out of candidates entirely.
//!
//! The worklist is a plain FIFO of cell indices with a cursor instead of
//! pop-front shifting; it can never exceed 81 entries because a cell is
//! only enqueued when it becomes determined. The buffer is owned by the
//! call, so concurrent solves never share state.

use crate::solver::cell::{CELL_COUNT, CellIx, peers};
use crate::solver::grid::Grid;
use smallvec::SmallVec;

/// Signal that some cell was driven to zero candidates.
///
/// Expected and recoverable: the search treats it as "this branch is
/// infeasible" and tries the next candidate. The grid is left partially
/// narrowed; callers keep their own pristine copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction;

/// Eliminate candidates implied by determined cells until a fixed point.
///
/// With `seed: Some(index)` only that freshly determined cell is taken as
/// the starting point — the incremental form the search uses after fixing
/// a branching cell. With `seed: None` every already determined cell in
/// the grid is enqueued, which brings an arbitrary grid to a propagation
/// fixed point from cold.
///
/// Returns the number of candidate eliminations performed, for the
/// statistics report.
///
/// # Errors
///
/// [`Contradiction`] as soon as any peer loses its last candidate. No
/// rollback is attempted; the caller discards the grid.
pub fn propagate(grid: &mut Grid, seed: Option<CellIx>) -> Result<usize, Contradiction> {
    let mut queue: SmallVec<[CellIx; CELL_COUNT]> = SmallVec::new();

    match seed {
        Some(index) => {
            debug_assert!(grid[index].is_determined());
            queue.push(index);
        }
        None => queue.extend((0..CELL_COUNT).filter(|&i| grid[i].is_determined())),
    }

    let mut head = 0;
    let mut eliminated = 0;

    while head < queue.len() {
        let index = queue[head];
        head += 1;

        let mask = grid[index];
        for peer in peers(index) {
            let old = grid[peer];
            let new = old.eliminate(mask);
            if new != old {
                grid[peer] = new;
                eliminated += 1;
                if new.is_empty() {
                    return Err(Contradiction);
                }
                if new.is_determined() {
                    queue.push(peer);
                }
            }
        }
    }

    Ok(eliminated)
}
