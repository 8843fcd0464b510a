//! The editor model: what the user has painted and what the last search
//! did.

use pathgrid_core::{CellId, Grid, Point};
use pathgrid_paths::{Algorithm, Outcome, SearchError};

use crate::config::{CELL_SIZE, Config};
use crate::input::Msg;

/// Result of the most recent search, shown in the side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running(Algorithm),
    Done {
        algorithm: Algorithm,
        outcome: Outcome,
        steps: usize,
    },
    Failed(String),
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Run {
        algorithm: Algorithm,
        start: CellId,
        end: CellId,
    },
    Quit,
}

pub struct Editor {
    grid: Grid,
    start: Option<CellId>,
    end: Option<CellId>,
    algorithm: Algorithm,
    status: Status,
}

impl Editor {
    pub fn new(config: &Config) -> Self {
        Self {
            grid: Grid::new(config.rows, CELL_SIZE),
            start: None,
            end: None,
            algorithm: config.algorithm,
            status: Status::Idle,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn start(&self) -> Option<CellId> {
        self.start
    }

    pub fn end(&self) -> Option<CellId> {
        self.end
    }

    /// Cell under a screen position. Each cell spans `cell_size` columns
    /// and one row.
    pub fn cell_at(&self, screen: Point) -> Option<CellId> {
        if screen.x < 0 || screen.y < 0 {
            return None;
        }
        let col = screen.x / self.grid.cell_size();
        self.grid.id(Point::from_row_col(screen.y, col))
    }

    /// Left click: place the start, then the end, then barriers. The start
    /// and end are never painted over.
    pub fn paint(&mut self, id: CellId) {
        let is_start = self.start == Some(id);
        let is_end = self.end == Some(id);
        if self.start.is_none() && !is_end {
            self.start = Some(id);
            self.grid[id].mark_start();
        } else if self.end.is_none() && !is_start {
            self.end = Some(id);
            self.grid[id].mark_end();
        } else if !is_start && !is_end {
            self.grid[id].mark_barrier();
        }
    }

    /// Right click: reset a cell, dropping its start/end role.
    pub fn erase(&mut self, id: CellId) {
        self.grid[id].reset();
        if self.start == Some(id) {
            self.start = None;
        } else if self.end == Some(id) {
            self.end = None;
        }
    }

    /// Start over with a fresh grid.
    pub fn clear(&mut self) {
        self.grid = Grid::new(self.grid.rows(), self.grid.cell_size());
        self.start = None;
        self.end = None;
        self.status = Status::Idle;
    }

    /// Prepare the grid for a run and return the endpoints, or `None`
    /// until both are placed.
    pub fn begin_run(&mut self) -> Option<(CellId, CellId)> {
        let (start, end) = (self.start?, self.end?);
        self.grid.clear_search();
        self.grid.recompute_neighbors();
        self.status = Status::Running(self.algorithm);
        Some((start, end))
    }

    pub fn finish_run(
        &mut self,
        algorithm: Algorithm,
        result: Result<Outcome, SearchError>,
        steps: usize,
    ) {
        self.status = match result {
            Ok(outcome) => {
                log::debug!("{algorithm}: {outcome} in {steps} steps");
                Status::Done {
                    algorithm,
                    outcome,
                    steps,
                }
            }
            Err(e) => Status::Failed(e.to_string()),
        };
    }

    pub fn update(&mut self, msg: Msg) -> Action {
        match msg {
            Msg::Paint(p) => {
                if let Some(id) = self.cell_at(p) {
                    self.paint(id);
                }
            }
            Msg::Erase(p) => {
                if let Some(id) = self.cell_at(p) {
                    self.erase(id);
                }
            }
            Msg::Select(a) => self.algorithm = a,
            Msg::Cycle => self.algorithm = self.algorithm.next(),
            Msg::Clear => self.clear(),
            Msg::ResetSearch => {
                self.grid.clear_search();
                self.status = Status::Idle;
            }
            Msg::Run => {
                if let Some((start, end)) = self.begin_run() {
                    return Action::Run {
                        algorithm: self.algorithm,
                        start,
                        end,
                    };
                }
            }
            Msg::Quit => return Action::Quit,
            Msg::Redraw => {}
        }
        Action::None
    }
}
