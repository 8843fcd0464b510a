use std::ops::ControlFlow;

use pathgrid_core::{CellId, Context, Grid};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::bfs::{Stack, traverse};
use crate::search::{Outcome, SearchError};

/// Depth-first search from `start` to `end`.
///
/// Each expanded cell's neighbours are shuffled with `rng` before they are
/// pushed, so runs differ from one another and the route found is rarely
/// the shortest. It is still found whenever one exists. Marks and
/// `on_step` behave as in [`breadth_first`](crate::breadth_first).
pub fn depth_first<R, F>(
    grid: &mut Grid,
    start: CellId,
    end: CellId,
    rng: &mut R,
    ctx: &Context,
    on_step: F,
) -> Result<Outcome, SearchError>
where
    R: Rng + ?Sized,
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    traverse(
        grid,
        start,
        end,
        ctx,
        on_step,
        Stack::default(),
        |nbuf: &mut Vec<CellId>| nbuf.shuffle(&mut *rng),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::chebyshev;
    use crate::fixtures::{keep_going, open_grid, prepare, walled_in_end};
    use pathgrid_core::CellState;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn always_finds_a_path_on_an_open_grid() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let (mut g, start, end) = prepare(open_grid(10), (0, 0), (9, 9));
            let out = depth_first(&mut g, start, end, &mut rng, &Context::new(), keep_going)
                .unwrap();
            // Any route is acceptable, but none can beat the direct one.
            let len = out.path_len().unwrap();
            assert!(len >= chebyshev(g.pos(start), g.pos(end)) as usize);
            assert_eq!(g.count(CellState::Path), len - 1);
        }
    }

    #[test]
    fn same_seed_same_route() {
        let run = |seed| {
            let (mut g, start, end) = prepare(open_grid(12), (1, 2), (10, 7));
            let mut rng = StdRng::seed_from_u64(seed);
            depth_first(&mut g, start, end, &mut rng, &Context::new(), keep_going).unwrap();
            g.iter()
                .filter(|(_, c)| c.state().is_path())
                .map(|(id, _)| id)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn walled_in_end_is_unreachable() {
        let (mut g, start, end) = prepare(walled_in_end(), (0, 0), (2, 2));
        let mut rng = StdRng::seed_from_u64(1);
        let mut steps = 0;
        let out = depth_first(&mut g, start, end, &mut rng, &Context::new(), |_| {
            steps += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(out, Ok(Outcome::NotFound));
        assert!(g.state(end).is_end());
        // Each of the 16 reachable cells is expanded exactly once whatever
        // order the shuffle picks.
        assert_eq!(steps, 16);
        assert_eq!(g.count(CellState::Closed), 15);
    }

    #[test]
    fn no_cell_is_expanded_twice() {
        for seed in 0..20 {
            let (mut g, start, end) = prepare(walled_in_end(), (4, 4), (2, 2));
            let mut rng = StdRng::seed_from_u64(seed);
            let mut steps = 0;
            depth_first(&mut g, start, end, &mut rng, &Context::new(), |_| {
                steps += 1;
                ControlFlow::Continue(())
            })
            .unwrap();
            assert_eq!(steps, 16, "seed {seed}");
        }
    }

    #[test]
    fn stored_neighbour_lists_are_untouched() {
        let (mut g, start, end) = prepare(open_grid(6), (0, 0), (5, 5));
        let before: Vec<Vec<CellId>> = g.iter().map(|(_, c)| c.neighbors().to_vec()).collect();
        let mut rng = StdRng::seed_from_u64(3);
        depth_first(&mut g, start, end, &mut rng, &Context::new(), keep_going).unwrap();
        let after: Vec<Vec<CellId>> = g.iter().map(|(_, c)| c.neighbors().to_vec()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn break_cancels_promptly() {
        let (mut g, start, end) = prepare(open_grid(30), (0, 0), (29, 29));
        let mut rng = StdRng::seed_from_u64(5);
        let mut steps = 0;
        let out = depth_first(&mut g, start, end, &mut rng, &Context::new(), |_| {
            steps += 1;
            ControlFlow::Break(())
        });
        assert_eq!(out, Ok(Outcome::Cancelled));
        assert_eq!(steps, 1);
    }
}
