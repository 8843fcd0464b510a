use std::collections::{HashMap, HashSet, VecDeque};
use std::ops::ControlFlow;

use pathgrid_core::{CellId, CellState, Context, Grid};

use crate::search::{Outcome, SearchError, check_endpoints, complete, mark, step};

/// Order in which discovered cells are taken back out for expansion.
pub(crate) trait Frontier {
    const NAME: &'static str;

    fn push(&mut self, id: CellId);
    fn pop(&mut self) -> Option<CellId>;
}

/// First in, first out.
#[derive(Default)]
pub(crate) struct Queue(VecDeque<CellId>);

impl Frontier for Queue {
    const NAME: &'static str = "breadth-first";

    #[inline]
    fn push(&mut self, id: CellId) {
        self.0.push_back(id);
    }

    #[inline]
    fn pop(&mut self) -> Option<CellId> {
        self.0.pop_front()
    }
}

/// Last in, first out.
#[derive(Default)]
pub(crate) struct Stack(Vec<CellId>);

impl Frontier for Stack {
    const NAME: &'static str = "depth-first";

    #[inline]
    fn push(&mut self, id: CellId) {
        self.0.push(id);
    }

    #[inline]
    fn pop(&mut self) -> Option<CellId> {
        self.0.pop()
    }
}

/// Unweighted traversal shared by breadth-first and depth-first search.
///
/// The end is checked when it is first discovered, before it would be
/// queued. `order` may rearrange each expanded cell's neighbours before
/// they are scanned. A cell is queued at most once at a time and never
/// after it has been expanded; the start is never re-queued.
pub(crate) fn traverse<Q, F>(
    grid: &mut Grid,
    start: CellId,
    end: CellId,
    ctx: &Context,
    mut on_step: F,
    mut frontier: Q,
    mut order: impl FnMut(&mut Vec<CellId>),
) -> Result<Outcome, SearchError>
where
    Q: Frontier,
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    check_endpoints(grid, start, end)?;
    log::debug!("{}: {} -> {}", Q::NAME, grid.pos(start), grid.pos(end));

    let mut came_from: HashMap<CellId, CellId> = HashMap::new();
    let mut queued: HashSet<CellId> = HashSet::new();
    let mut closed: HashSet<CellId> = HashSet::new();

    frontier.push(start);
    queued.insert(start);

    let mut nbuf: Vec<CellId> = Vec::with_capacity(8);
    let mut expanded = 0usize;

    loop {
        if ctx.is_cancelled() {
            log::debug!("{}: cancelled after {expanded} expansions", Q::NAME);
            return Ok(Outcome::Cancelled);
        }
        let Some(node) = frontier.pop() else {
            break;
        };
        queued.remove(&node);
        log::trace!("{}: expand {}", Q::NAME, grid.pos(node));

        nbuf.clear();
        nbuf.extend_from_slice(grid.neighbors(node));
        order(&mut nbuf);
        for &n in nbuf.iter() {
            if n == start || closed.contains(&n) || queued.contains(&n) {
                continue;
            }
            came_from.insert(n, node);
            if n == end {
                let outcome = complete(grid, &came_from, start, end, ctx, &mut on_step)?;
                log::debug!("{}: {outcome} after {expanded} expansions", Q::NAME);
                return Ok(outcome);
            }
            frontier.push(n);
            queued.insert(n);
            mark(grid, n, CellState::Open);
        }

        if node == end {
            let outcome = complete(grid, &came_from, start, end, ctx, &mut on_step)?;
            log::debug!("{}: {outcome} after {expanded} expansions", Q::NAME);
            return Ok(outcome);
        }

        closed.insert(node);
        if node != start {
            mark(grid, node, CellState::Closed);
        }
        expanded += 1;

        if step(grid, ctx, &mut on_step).is_break() {
            log::debug!("{}: cancelled after {expanded} expansions", Q::NAME);
            return Ok(Outcome::Cancelled);
        }
    }

    log::debug!("{}: no path after {expanded} expansions", Q::NAME);
    Ok(Outcome::NotFound)
}

/// Breadth-first search from `start` to `end`.
///
/// Returns a route with the fewest moves when one exists. Cells are marked
/// open when queued and closed once expanded; `on_step` runs once per
/// expanded cell and can stop the search by returning `Break`.
pub fn breadth_first<F>(
    grid: &mut Grid,
    start: CellId,
    end: CellId,
    ctx: &Context,
    on_step: F,
) -> Result<Outcome, SearchError>
where
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    traverse(grid, start, end, ctx, on_step, Queue::default(), |_| {})
}
