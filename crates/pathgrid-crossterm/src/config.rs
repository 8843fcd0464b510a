//! Command-line configuration.

use std::time::Duration;

use clap::Parser;
use pathgrid_paths::Algorithm;

/// Smallest grid that can wall in an end cell.
pub const MIN_ROWS: i32 = 3;
pub const MAX_ROWS: i32 = 100;

/// Terminal columns per grid cell (terminal glyphs are about twice as tall
/// as they are wide).
pub const CELL_SIZE: i32 = 2;

/// Paint a grid in the terminal and watch A*, BFS or DFS search it.
#[derive(Parser, Debug)]
#[command(name = "pathgrid", version, about, long_about = None)]
pub struct Args {
    /// Grid rows (and columns), clamped to 3..=100
    #[arg(short, long, default_value_t = 30, allow_negative_numbers = true)]
    rows: i32,

    /// Algorithm selected at startup: astar, bfs or dfs
    #[arg(short, long = "algo", default_value = "astar")]
    algorithm: Algorithm,

    /// Pause after each search step, in milliseconds
    #[arg(short, long, default_value_t = 10)]
    delay: u64,
}

/// Runtime options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Grid rows (and columns).
    pub rows: i32,
    /// Algorithm selected at startup.
    pub algorithm: Algorithm,
    /// Pause after each search step so the animation is visible.
    pub delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 30,
            algorithm: Algorithm::BestFirst,
            delay: Duration::from_millis(10),
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            rows: args.rows.clamp(MIN_ROWS, MAX_ROWS),
            algorithm: args.algorithm,
            delay: Duration::from_millis(args.delay),
        }
    }
}
