use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::ops::ControlFlow;

use pathgrid_core::{CellId, CellState, Context, Grid};

use crate::distance::euclidean;
use crate::search::{Outcome, SearchError, check_endpoints, complete, mark, step};

/// Open-set entry, ordered by `(f, seq)` for use in `BinaryHeap`.
///
/// `seq` is unique per push, so equal scores pop in insertion order and
/// the ordering is total.
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f: f64,
    seq: u64,
    id: CellId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Best-first (A*) search from `start` to `end`, one expansion per step.
///
/// Every move costs 1 and the estimate is [`euclidean`]. A cell whose cost
/// improves while it is already queued keeps its original queue position.
/// Discovered cells are marked open and expanded cells closed; on success
/// the route is marked as path and both endpoints are restored.
///
/// `on_step` runs once per expanded cell. Returning `Break` from it, or
/// cancelling `ctx`, stops the search with [`Outcome::Cancelled`].
pub fn best_first<F>(
    grid: &mut Grid,
    start: CellId,
    end: CellId,
    ctx: &Context,
    mut on_step: F,
) -> Result<Outcome, SearchError>
where
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    check_endpoints(grid, start, end)?;
    let goal = grid.pos(end);
    log::debug!("best-first: {} -> {}", grid.pos(start), goal);

    let mut came_from: HashMap<CellId, CellId> = HashMap::new();
    let mut g_score: HashMap<CellId, u32> = HashMap::new();
    let mut f_score: HashMap<CellId, f64> = HashMap::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut in_open: HashSet<CellId> = HashSet::new();
    let mut seq: u64 = 0;

    g_score.insert(start, 0);
    f_score.insert(start, euclidean(grid.pos(start), goal));
    open.push(OpenEntry {
        f: f_score[&start],
        seq,
        id: start,
    });
    in_open.insert(start);

    let mut nbuf: Vec<CellId> = Vec::with_capacity(8);
    let mut expanded = 0usize;

    loop {
        if ctx.is_cancelled() {
            log::debug!("best-first: cancelled after {expanded} expansions");
            return Ok(Outcome::Cancelled);
        }
        let Some(OpenEntry { id: current, .. }) = open.pop() else {
            break;
        };
        in_open.remove(&current);

        if current == end {
            let outcome = complete(grid, &came_from, start, end, ctx, &mut on_step)?;
            log::debug!("best-first: {outcome} after {expanded} expansions");
            return Ok(outcome);
        }

        let current_g = g_score[&current];
        log::trace!("best-first: expand {} g={current_g}", grid.pos(current));

        nbuf.clear();
        nbuf.extend_from_slice(grid.neighbors(current));
        for &n in nbuf.iter() {
            let tentative_g = current_g + 1;
            if tentative_g >= g_score.get(&n).copied().unwrap_or(u32::MAX) {
                continue;
            }
            came_from.insert(n, current);
            g_score.insert(n, tentative_g);
            let f = f64::from(tentative_g) + euclidean(grid.pos(n), goal);
            f_score.insert(n, f);
            if in_open.insert(n) {
                seq += 1;
                open.push(OpenEntry { f, seq, id: n });
                mark(grid, n, CellState::Open);
            }
        }
        expanded += 1;

        if step(grid, ctx, &mut on_step).is_break() {
            log::debug!("best-first: cancelled after {expanded} expansions");
            return Ok(Outcome::Cancelled);
        }

        if current != start {
            mark(grid, current, CellState::Closed);
        }
    }

    log::debug!("best-first: no path after {expanded} expansions");
    Ok(Outcome::NotFound)
}
