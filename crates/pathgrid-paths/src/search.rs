//! Shared search contract: [`Outcome`], [`SearchError`] and the helpers
//! every algorithm runs through.

use std::collections::HashMap;
use std::fmt;
use std::ops::ControlFlow;

use pathgrid_core::{CellId, CellState, Context, Grid, Point};

use crate::reconstruct::reconstruct_path;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The end was reached; `path_len` is the route length in moves.
    Found { path_len: usize },
    /// The frontier emptied without reaching the end.
    NotFound,
    /// The caller stopped the search. The grid is left as expanded so far.
    Cancelled,
}

impl Outcome {
    /// Whether a path was found.
    #[inline]
    pub fn found(self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Path length, if a path was found.
    #[inline]
    pub fn path_len(self) -> Option<usize> {
        match self {
            Self::Found { path_len } => Some(path_len),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { path_len } => write!(f, "found (length {path_len})"),
            Self::NotFound => f.write_str("no path"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Contract violations by the caller, or broken internal bookkeeping.
///
/// "No path" is not an error; it is [`Outcome::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start and end are the same cell.
    SameEndpoints,
    /// An endpoint id does not belong to the grid.
    OutOfBounds(CellId),
    /// An endpoint is a barrier.
    BarrierEndpoint(Point),
    /// A cell on the route has no recorded predecessor.
    BrokenPredecessorChain(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameEndpoints => f.write_str("search: start and end are the same cell"),
            Self::OutOfBounds(id) => write!(f, "search: cell {id} is outside the grid"),
            Self::BarrierEndpoint(p) => write!(f, "search: endpoint {p} is a barrier"),
            Self::BrokenPredecessorChain(p) => {
                write!(f, "search: no predecessor recorded for {p}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Reject endpoints a search cannot run between.
pub(crate) fn check_endpoints(grid: &Grid, start: CellId, end: CellId) -> Result<(), SearchError> {
    let err = if !grid.contains_id(start) {
        Some(SearchError::OutOfBounds(start))
    } else if !grid.contains_id(end) {
        Some(SearchError::OutOfBounds(end))
    } else if start == end {
        Some(SearchError::SameEndpoints)
    } else if grid.state(start).is_barrier() {
        Some(SearchError::BarrierEndpoint(grid.pos(start)))
    } else if grid.state(end).is_barrier() {
        Some(SearchError::BarrierEndpoint(grid.pos(end)))
    } else {
        None
    };
    match err {
        Some(e) => {
            log::warn!("rejecting search: {e}");
            Err(e)
        }
        None => Ok(()),
    }
}

/// Hand the grid to the caller, then honour any cancel request.
#[inline]
pub(crate) fn step<F>(grid: &Grid, ctx: &Context, on_step: &mut F) -> ControlFlow<()>
where
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    on_step(grid)?;
    ctx.checkpoint()
}

/// Set a frontier/visited mark unless `id` is the start or end cell.
#[inline]
pub(crate) fn mark(grid: &mut Grid, id: CellId, state: CellState) {
    let cell = &mut grid[id];
    if !(cell.state().is_start() || cell.state().is_end()) {
        cell.set_state(state);
    }
}

/// Rebuild the route and restore the endpoint designations.
pub(crate) fn complete<F>(
    grid: &mut Grid,
    came_from: &HashMap<CellId, CellId>,
    start: CellId,
    end: CellId,
    ctx: &Context,
    on_step: &mut F,
) -> Result<Outcome, SearchError>
where
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    let Some(path_len) = reconstruct_path(grid, came_from, end, start, ctx, on_step)? else {
        return Ok(Outcome::Cancelled);
    };
    grid[start].mark_start();
    grid[end].mark_end();
    Ok(Outcome::Found { path_len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_endpoints() {
        let mut g = Grid::new(3, 1);
        let a = CellId(0);
        let b = CellId(8);
        assert_eq!(check_endpoints(&g, a, a), Err(SearchError::SameEndpoints));
        assert_eq!(
            check_endpoints(&g, a, CellId(9)),
            Err(SearchError::OutOfBounds(CellId(9)))
        );
        g[b].mark_barrier();
        assert_eq!(
            check_endpoints(&g, a, b),
            Err(SearchError::BarrierEndpoint(Point::new(2, 2)))
        );
        g[b].reset();
        assert_eq!(check_endpoints(&g, a, b), Ok(()));
    }

    #[test]
    fn mark_spares_endpoints() {
        let mut g = Grid::new(2, 1);
        g[CellId(0)].mark_start();
        g[CellId(3)].mark_end();
        for i in 0..4 {
            mark(&mut g, CellId(i), CellState::Closed);
        }
        assert!(g.state(CellId(0)).is_start());
        assert!(g.state(CellId(3)).is_end());
        assert_eq!(g.count(CellState::Closed), 2);
    }

    #[test]
    fn step_observes_context() {
        let g = Grid::new(1, 1);
        let ctx = Context::new();
        let mut calls = 0;
        let mut cb = |_: &Grid| {
            calls += 1;
            ControlFlow::Continue(())
        };
        assert!(step(&g, &ctx, &mut cb).is_continue());
        ctx.cancel();
        assert!(step(&g, &ctx, &mut cb).is_break());
        assert_eq!(calls, 2);
    }

    #[test]
    fn outcome_accessors() {
        assert!(Outcome::Found { path_len: 4 }.found());
        assert_eq!(Outcome::Found { path_len: 4 }.path_len(), Some(4));
        assert!(!Outcome::NotFound.found());
        assert_eq!(Outcome::Cancelled.path_len(), None);
        assert_eq!(Outcome::NotFound.to_string(), "no path");
    }

    #[test]
    fn error_display() {
        let e = SearchError::BarrierEndpoint(Point::new(1, 2));
        assert_eq!(e.to_string(), "search: endpoint (1, 2) is a barrier");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let o = Outcome::Found { path_len: 9 };
        let json = serde_json::to_string(&o).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(o, back);
    }
}
