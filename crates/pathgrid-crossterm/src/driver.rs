//! Crossterm terminal driver.
//!
//! Owns the terminal while the editor runs: raw mode, the alternate
//! screen and mouse capture on [`init`](Terminal::init), restored on
//! [`close`](Terminal::close). Grid cells are redrawn only when their
//! state changed since the last frame.

use std::error::Error;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathgrid_core::{CellState, Context, Grid};

use crate::colors::{GREY, state_color};
use crate::editor::{Editor, Status};
use crate::input::{Msg, to_msg};

/// A screen that must be restored however the program exits.
pub trait Terminal {
    fn init(&mut self) -> io::Result<()>;
    fn close(&mut self);
}

/// Run `body` on an initialised terminal, closing it afterwards. The
/// terminal is also closed when `init` fails part way through.
pub fn session<T, R>(
    term: &mut T,
    body: impl FnOnce(&mut T) -> Result<R, Box<dyn Error>>,
) -> Result<R, Box<dyn Error>>
where
    T: Terminal,
{
    let result = match term.init() {
        Ok(()) => body(term),
        Err(e) => Err(e.into()),
    };
    term.close();
    result
}

pub struct TermDriver {
    out: Stdout,
    delay: Duration,
    /// State of every cell as last drawn; `None` forces a redraw.
    shown: Vec<Option<CellState>>,
}

impl Terminal for TermDriver {
    fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture,
            terminal::Clear(ClearType::All)
        )
    }

    fn close(&mut self) {
        let _ = execute!(
            self.out,
            DisableMouseCapture,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

impl TermDriver {
    pub fn new(delay: Duration) -> Self {
        Self {
            out: io::stdout(),
            delay,
            shown: Vec::new(),
        }
    }

    /// Forget what is on screen so the next draw repaints everything.
    pub fn invalidate(&mut self) -> io::Result<()> {
        self.shown.clear();
        queue!(self.out, ResetColor, terminal::Clear(ClearType::All))
    }

    fn draw_grid(&mut self, grid: &Grid) -> io::Result<()> {
        if self.shown.len() != grid.len() {
            self.shown = vec![None; grid.len()];
        }
        for (id, cell) in grid.iter() {
            let state = cell.state();
            if self.shown[id.index()] == Some(state) {
                continue;
            }
            self.shown[id.index()] = Some(state);
            let p = cell.pos();
            let x = p.x * grid.cell_size();
            let glyph = if state.is_empty() { "· " } else { "  " };
            queue!(
                self.out,
                cursor::MoveTo(x as u16, p.y as u16),
                SetBackgroundColor(state_color(state)),
                SetForegroundColor(GREY),
                Print(glyph)
            )?;
        }
        queue!(self.out, ResetColor)
    }

    fn draw_panel(&mut self, editor: &Editor) -> io::Result<()> {
        let grid = editor.grid();
        let x = (grid.rows() * grid.cell_size() + 2) as u16;
        let algo = editor.algorithm();
        let status = match editor.status() {
            Status::Idle => match (editor.start(), editor.end()) {
                (None, _) => String::from("click to place the start"),
                (_, None) => String::from("click to place the end"),
                _ => String::from("ready, space to run"),
            },
            Status::Running(a) => format!("running {a} (esc to cancel)"),
            Status::Done {
                algorithm,
                outcome,
                steps,
            } => format!("{algorithm}: {outcome}, {steps} steps"),
            Status::Failed(e) => e.clone(),
        };
        let lines = [
            String::from("pathgrid"),
            String::new(),
            format!("algorithm: {algo}"),
            String::from("1 A*  2 BFS  3 DFS  tab next"),
            String::new(),
            status,
            String::new(),
            String::from("left click   start, end, wall"),
            String::from("right click  erase"),
            String::from("space        run"),
            String::from("r            clear search"),
            String::from("c            clear all"),
            String::from("q            quit"),
        ];
        for (i, line) in lines.iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(x, i as u16),
                Print(line),
                terminal::Clear(ClearType::UntilNewLine)
            )?;
        }
        Ok(())
    }

    /// Draw the grid and side panel.
    pub fn draw(&mut self, editor: &Editor) -> io::Result<()> {
        self.draw_grid(editor.grid())?;
        self.draw_panel(editor)?;
        self.out.flush()
    }

    /// Wait up to `timeout` for the next meaningful input.
    pub fn next_msg(&mut self, timeout: Duration) -> io::Result<Option<Msg>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(to_msg(&event::read()?))
    }

    /// One animation frame of a running search: redraw the grid, then
    /// watch for a cancel request for the rest of the frame delay.
    pub fn step(&mut self, grid: &Grid, ctx: &Context) -> io::Result<()> {
        self.draw_grid(grid)?;
        self.out.flush()?;

        let deadline = Instant::now() + self.delay;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                return Ok(());
            }
            match to_msg(&event::read()?) {
                Some(Msg::Quit) => {
                    log::debug!("search cancelled from the keyboard");
                    ctx.cancel();
                    return Ok(());
                }
                Some(Msg::Redraw) => self.invalidate()?,
                _ => {}
            }
        }
    }
}
