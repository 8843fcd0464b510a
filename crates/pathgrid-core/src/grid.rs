//! The [`Grid`] type: a square arena of [`Cell`]s.
//!
//! Cells refer to each other through [`CellId`] indices, never through
//! references, so the neighbor graph carries no ownership cycles. Ids are
//! laid out row-major: `id = row * rows + col`.

use std::ops::{Index, IndexMut};

use crate::cell::{Cell, CellId, CellState};
use crate::geom::Point;

/// Neighbor offsets as `(row, col)` deltas, in scan order: down,
/// down-right, down-left, left, up, up-right, up-left, right.
///
/// The order is observable: breadth-first and best-first visit neighbors
/// in exactly this sequence.
pub const NEIGHBOR_DELTAS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
    (0, 1),
];

/// A `rows × rows` grid of cells with a uniform presentation cell size.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: i32,
    cell_size: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell [`Empty`](CellState::Empty).
    ///
    /// Neighbor lists start empty; call
    /// [`recompute_neighbors`](Self::recompute_neighbors) before searching.
    pub fn new(rows: i32, cell_size: i32) -> Self {
        let rows = rows.max(0);
        let mut cells = Vec::with_capacity(area(rows));
        for row in 0..rows {
            for col in 0..rows {
                cells.push(Cell::new(Point::from_row_col(row, col)));
            }
        }
        Self {
            rows,
            cell_size: cell_size.max(1),
            cells,
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Presentation size of one cell.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.rows && p.y < self.rows
    }

    /// Whether `id` names a cell of this grid.
    #[inline]
    pub fn contains_id(&self, id: CellId) -> bool {
        id.0 < self.cells.len()
    }

    /// Id of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn id(&self, p: Point) -> Option<CellId> {
        if !self.contains(p) {
            return None;
        }
        Some(CellId(row_major(self.rows, p)))
    }

    /// Position of the cell `id`.
    #[inline]
    pub fn pos(&self, id: CellId) -> Point {
        self.cells[id.0].pos()
    }

    #[inline]
    pub fn state(&self, id: CellId) -> CellState {
        self.cells[id.0].state()
    }

    #[inline]
    pub fn set_state(&mut self, id: CellId, state: CellState) {
        self.cells[id.0].set_state(state);
    }

    /// Passable neighbors of `id` as of the last recompute.
    #[inline]
    pub fn neighbors(&self, id: CellId) -> &[CellId] {
        self.cells[id.0].neighbors()
    }

    /// Iterate over all cells with their ids, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, c)| (CellId(i), c))
    }

    /// Rebuild every cell's neighbor list.
    ///
    /// A neighbor is any in-bounds cell among the eight surrounding ones
    /// that is not a barrier right now. Barrier cells get lists too; they
    /// are simply never reachable.
    pub fn recompute_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let p = self.cells[i].pos();
            let mut list = Vec::with_capacity(NEIGHBOR_DELTAS.len());
            for (dr, dc) in NEIGHBOR_DELTAS {
                let Some(nid) = self.id(p.shift(dc, dr)) else {
                    continue;
                };
                if !self.cells[nid.0].state().is_barrier() {
                    list.push(nid);
                }
            }
            self.cells[i].neighbors = list;
        }
    }

    /// Erase search marks (open, closed, path), keeping start, end and
    /// barriers so the same layout can be searched again.
    pub fn clear_search(&mut self) {
        for c in self.cells.iter_mut() {
            if c.state().is_search_mark() {
                c.reset();
            }
        }
    }

    /// Count cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }
}

/// Number of cells in a `rows × rows` grid.
fn area(rows: i32) -> usize {
    let n = rows as usize;
    n * n
}

/// Row-major index of an in-bounds `p`, computed in `usize` so large grids
/// do not overflow `i32`.
fn row_major(rows: i32, p: Point) -> usize {
    p.y as usize * rows as usize + p.x as usize
}

impl Index<CellId> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }
}

impl IndexMut<CellId> for Grid {
    #[inline]
    fn index_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }
}
