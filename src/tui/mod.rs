//! tui — interactive browser screen (ratatui + crossterm).
//!
//! Blocking loop: draw, wait for one terminal event, apply it. There are no
//! timers and no background work. The terminal is put back into cooked mode by
//! `TerminalGuard::drop` on every exit path, including errors and panics.

pub mod keys;
pub mod state;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::pager::Pager;
use crate::store::KvSource;

pub use keys::{action_for, Action};
pub use state::{BrowserState, Flow};

/// How the browser session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    Interrupted,
}

/// Raw mode + alternate screen for the lifetime of the guard.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("enter alternate screen");
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(e).context("init terminal")
            }
        }
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore errors on drop are ignored; nothing else can be done here.
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the browser until the user quits or interrupts.
pub fn run_browser<S: KvSource>(pager: Pager<S>, db_name: &str) -> Result<Exit> {
    let mut state = BrowserState::new(pager, db_name)?;
    let mut guard = TerminalGuard::enter()?;

    loop {
        // SIGINT from outside the terminal; raw mode keeps Ctrl+C a key press.
        if state.pager().interrupted() {
            return Ok(Exit::Interrupted);
        }
        guard
            .terminal()
            .draw(|f| ui::render(f, &mut state))
            .context("draw screen")?;

        match event::read().context("read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = action_for(key) else {
                    continue;
                };
                match state.apply(action)? {
                    Flow::Continue => {}
                    Flow::Quit => {
                        debug!("browser: quit on page {}", state.pager().current_page() + 1);
                        return Ok(Exit::Quit);
                    }
                    Flow::Interrupt => return Ok(Exit::Interrupted),
                }
            }
            // Resize and everything else only needs a redraw.
            _ => {}
        }
    }
}
