//! Raw mode and alternate screen handling
//!
//! [`init`] never leaves the shell in raw mode: if entering the alternate
//! screen or building the terminal fails, raw mode is switched off again
//! before the error is returned.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    setup_or_undo(enter_screen, restore_quietly)
}

/// Leave the alternate screen and raw mode, showing the cursor again.
pub fn restore(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn enter_screen() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Best effort: the original setup error is the one worth reporting.
fn restore_quietly() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Run `setup`, calling `undo` before passing on its error.
fn setup_or_undo<T, E>(
    setup: impl FnOnce() -> Result<T, E>,
    undo: impl FnOnce(),
) -> Result<T, E> {
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            undo();
            Err(e)
        }
    }
}
