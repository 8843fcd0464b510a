use std::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;

use pathgrid_core::{CellId, Context, Grid};
use rand::Rng;

use crate::astar::best_first;
use crate::bfs::breadth_first;
use crate::dfs::depth_first;
use crate::search::{Outcome, SearchError};

/// The three interchangeable search strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    BestFirst,
    BreadthFirst,
    DepthFirst,
}

impl Algorithm {
    /// All strategies, in menu order.
    pub const ALL: [Algorithm; 3] = [Self::BestFirst, Self::BreadthFirst, Self::DepthFirst];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BestFirst => "A*",
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
        }
    }

    /// The next strategy in menu order, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            Self::BestFirst => Self::BreadthFirst,
            Self::BreadthFirst => Self::DepthFirst,
            Self::DepthFirst => Self::BestFirst,
        }
    }

    /// Run this strategy, using the thread-local RNG for depth-first.
    pub fn run<F>(
        self,
        grid: &mut Grid,
        start: CellId,
        end: CellId,
        ctx: &Context,
        on_step: F,
    ) -> Result<Outcome, SearchError>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        self.run_with_rng(grid, start, end, &mut rand::rng(), ctx, on_step)
    }

    /// Run this strategy with an explicit RNG (only depth-first draws
    /// from it).
    pub fn run_with_rng<R, F>(
        self,
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
        match self {
            Self::BestFirst => best_first(grid, start, end, ctx, on_step),
            Self::BreadthFirst => breadth_first(grid, start, end, ctx, on_step),
            Self::DepthFirst => depth_first(grid, start, end, rng, ctx, on_step),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected astar, bfs or dfs)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" | "best-first" => Ok(Self::BestFirst),
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
