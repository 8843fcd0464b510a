//! Grids shared by the search tests.

use std::ops::ControlFlow;

use pathgrid_core::{CellId, Grid, NEIGHBOR_DELTAS, Point};

pub(crate) fn keep_going(_: &Grid) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

pub(crate) fn cell(g: &Grid, row: i32, col: i32) -> CellId {
    g.id(Point::from_row_col(row, col)).unwrap()
}

pub(crate) fn open_grid(rows: i32) -> Grid {
    Grid::new(rows, 1)
}

/// 5x5 with all eight neighbours of (2, 2) walled off.
pub(crate) fn walled_in_end() -> Grid {
    let mut g = Grid::new(5, 1);
    for (dr, dc) in NEIGHBOR_DELTAS {
        let id = cell(&g, 2 + dr, 2 + dc);
        g[id].mark_barrier();
    }
    g
}

/// 7x7 with a wall down column 3, open only at the bottom row.
pub(crate) fn wall_with_gap() -> Grid {
    let mut g = Grid::new(7, 1);
    for row in 0..6 {
        let id = cell(&g, row, 3);
        g[id].mark_barrier();
    }
    g
}

/// Mark start and end (as `(row, col)`), then recompute neighbours.
pub(crate) fn prepare(mut g: Grid, start: (i32, i32), end: (i32, i32)) -> (Grid, CellId, CellId) {
    let s = cell(&g, start.0, start.1);
    let e = cell(&g, end.0, end.1);
    g[s].mark_start();
    g[e].mark_end();
    g.recompute_neighbors();
    (g, s, e)
}

/// Build a square grid from a text picture: `#` is a barrier, `S` and `E`
/// are the endpoints, anything else is empty. Neighbours are recomputed.
pub(crate) fn layout(rows: &[&str]) -> (Grid, CellId, CellId) {
    let mut g = Grid::new(rows.len() as i32, 1);
    let (mut s, mut e) = (None, None);
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let id = cell(&g, row as i32, col as i32);
            match ch {
                '#' => g[id].mark_barrier(),
                'S' => {
                    g[id].mark_start();
                    s = Some(id);
                }
                'E' => {
                    g[id].mark_end();
                    e = Some(id);
                }
                _ => {}
            }
        }
    }
    g.recompute_neighbors();
    (g, s.unwrap(), e.unwrap())
}
