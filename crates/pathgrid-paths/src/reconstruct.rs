//! Path reconstruction from a predecessor map.

use std::collections::HashMap;
use std::ops::ControlFlow;

use pathgrid_core::{CellId, Context, Grid};

use crate::search::{SearchError, step};

/// Walk `came_from` back from `goal` to `start`, marking every cell in
/// between as [`Path`](pathgrid_core::CellState::Path).
///
/// `on_step` runs after each mark. Neither `goal` nor `start` is marked.
/// Returns the route length in moves (three for `start -> a -> b -> goal`),
/// or `None` if `on_step` or `ctx` stopped the walk early.
///
/// A cell without a predecessor before `start` is reached means the
/// search's bookkeeping is broken and is reported as
/// [`SearchError::BrokenPredecessorChain`].
pub fn reconstruct_path<F>(
    grid: &mut Grid,
    came_from: &HashMap<CellId, CellId>,
    goal: CellId,
    start: CellId,
    ctx: &Context,
    mut on_step: F,
) -> Result<Option<usize>, SearchError>
where
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    if goal == start {
        return Ok(Some(0));
    }

    let mut current = goal;
    let mut hops = 0;
    loop {
        let Some(&prev) = came_from.get(&current) else {
            return Err(SearchError::BrokenPredecessorChain(grid.pos(current)));
        };
        hops += 1;
        if prev == start {
            break;
        }
        // A chain longer than the grid has cycled.
        if hops >= grid.len() {
            return Err(SearchError::BrokenPredecessorChain(grid.pos(prev)));
        }
        grid[prev].mark_path();
        if step(grid, ctx, &mut on_step).is_break() {
            return Ok(None);
        }
        current = prev;
    }
    Ok(Some(hops))
}
