//! **pathgrid-core**: grid and cell model for the pathgrid search
//! visualizer.
//!
//! A [`Grid`] is a square arena of [`Cell`]s addressed by [`CellId`]. Each
//! cell carries a [`CellState`] and an 8-directional neighbor list that is
//! rebuilt on demand with [`Grid::recompute_neighbors`]. [`Context`] is the
//! cancellation token searches poll while they run.

pub mod cell;
pub mod context;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellId, CellState};
pub use context::Context;
pub use geom::Point;
pub use grid::{Grid, NEIGHBOR_DELTAS};
