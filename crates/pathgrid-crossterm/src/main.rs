//! pathgrid: paint a grid in the terminal and watch A*, BFS or DFS find
//! a way across it.

mod colors;
mod config;
mod driver;
mod editor;
mod input;

use std::ops::ControlFlow;
use std::time::Duration;

use clap::Parser;
use pathgrid_core::Context;

use config::{Args, Config};
use driver::{TermDriver, session};
use editor::{Action, Editor};
use input::Msg;

/// How long the idle loop waits for input before checking again.
const IDLE_POLL: Duration = Duration::from_millis(50);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from(Args::parse());

    let mut editor = Editor::new(&config);
    let mut driver = TermDriver::new(config.delay);
    session(&mut driver, |driver| event_loop(&mut editor, driver))
}

fn event_loop(
    editor: &mut Editor,
    driver: &mut TermDriver,
) -> Result<(), Box<dyn std::error::Error>> {
    driver.draw(editor)?;
    loop {
        let Some(msg) = driver.next_msg(IDLE_POLL)? else {
            continue;
        };
        if msg == Msg::Redraw || msg == Msg::Clear {
            driver.invalidate()?;
        }
        match editor.update(msg) {
            Action::None => {}
            Action::Quit => return Ok(()),
            Action::Run {
                algorithm,
                start,
                end,
            } => {
                driver.draw(editor)?;
                let ctx = Context::new();
                let mut steps = 0;
                let mut io_err = None;
                let result = algorithm.run(editor.grid_mut(), start, end, &ctx, |grid| {
                    steps += 1;
                    match driver.step(grid, &ctx) {
                        Ok(()) => ControlFlow::Continue(()),
                        Err(e) => {
                            io_err = Some(e);
                            ControlFlow::Break(())
                        }
                    }
                });
                if let Some(e) = io_err {
                    return Err(e.into());
                }
                editor.finish_run(algorithm, result, steps);
            }
        }
        driver.draw(editor)?;
    }
}
