//! The [`Cell`] type: one grid position with a search state.

use std::fmt;

use crate::geom::Point;

/// The visual/search state of a cell. Exactly one state at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    /// Discovered and waiting in the frontier.
    Open,
    /// Expanded.
    Closed,
    /// Impassable.
    Barrier,
    Start,
    End,
    /// On the reconstructed route.
    Path,
}

impl CellState {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[inline]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    #[inline]
    pub const fn is_barrier(self) -> bool {
        matches!(self, Self::Barrier)
    }

    #[inline]
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Start)
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::End)
    }

    #[inline]
    pub const fn is_path(self) -> bool {
        matches!(self, Self::Path)
    }

    /// Whether the state was produced by a search run (open, closed or path).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }
}

/// Index of a cell inside its owning [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

impl CellId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single grid position.
///
/// The neighbor list is only accurate between a call to
/// [`Grid::recompute_neighbors`](crate::Grid::recompute_neighbors) and the
/// next barrier edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    state: CellState,
    pub(crate) neighbors: Vec<CellId>,
}

impl Cell {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            state: CellState::Empty,
            neighbors: Vec::new(),
        }
    }

    /// Grid position.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Passable neighbors as of the last recompute.
    #[inline]
    pub fn neighbors(&self) -> &[CellId] {
        &self.neighbors
    }

    /// Overwrite the state.
    #[inline]
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    #[inline]
    pub fn reset(&mut self) {
        self.state = CellState::Empty;
    }

    #[inline]
    pub fn mark_open(&mut self) {
        self.state = CellState::Open;
    }

    #[inline]
    pub fn mark_closed(&mut self) {
        self.state = CellState::Closed;
    }

    #[inline]
    pub fn mark_barrier(&mut self) {
        self.state = CellState::Barrier;
    }

    #[inline]
    pub fn mark_start(&mut self) {
        self.state = CellState::Start;
    }

    #[inline]
    pub fn mark_end(&mut self) {
        self.state = CellState::End;
    }

    #[inline]
    pub fn mark_path(&mut self) {
        self.state = CellState::Path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_empty() {
        let c = Cell::new(Point::new(2, 3));
        assert_eq!(c.pos(), Point::new(2, 3));
        assert!(c.state().is_empty());
        assert!(c.neighbors().is_empty());
    }

    #[test]
    fn transitions_overwrite() {
        let mut c = Cell::new(Point::ZERO);
        c.mark_start();
        assert!(c.state().is_start());
        // No validation: a start can be painted over.
        c.mark_barrier();
        assert!(c.state().is_barrier());
        c.mark_open();
        c.mark_closed();
        assert!(c.state().is_closed());
        c.mark_path();
        assert!(c.state().is_path());
        c.reset();
        assert_eq!(c.state(), CellState::Empty);
    }

    #[test]
    fn search_marks() {
        assert!(CellState::Open.is_search_mark());
        assert!(CellState::Closed.is_search_mark());
        assert!(CellState::Path.is_search_mark());
        assert!(!CellState::Start.is_search_mark());
        assert!(!CellState::Barrier.is_search_mark());
        assert!(!CellState::Empty.is_search_mark());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn state_round_trip() {
        let json = serde_json::to_string(&CellState::Barrier).unwrap();
        let back: CellState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CellState::Barrier);
    }
}
