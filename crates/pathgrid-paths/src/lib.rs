//! Step-by-step search on a [`Grid`](pathgrid_core::Grid).
//!
//! Three strategies share one contract: they take a grid whose neighbour
//! lists are current, a start and an end cell, a cancellation
//! [`Context`](pathgrid_core::Context) and an `on_step` callback that
//! receives the grid after every expansion so a front end can redraw.
//!
//! - **Best-first / A\*** ([`best_first`]) with a [`euclidean`] estimate
//! - **Breadth-first** ([`breadth_first`]) with a FIFO frontier
//! - **Depth-first** ([`depth_first`]) with a LIFO frontier and shuffled
//!   neighbours
//!
//! Cells are marked open, closed and path as the search progresses. Each
//! search returns an [`Outcome`]; caller contract violations come back as
//! [`SearchError`]. [`Algorithm`] selects between the three at runtime.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod distance;
mod reconstruct;
mod search;

#[cfg(test)]
mod fixtures;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::best_first;
pub use bfs::breadth_first;
pub use dfs::depth_first;
pub use distance::{chebyshev, euclidean};
pub use reconstruct::reconstruct_path;
pub use search::{Outcome, SearchError};
