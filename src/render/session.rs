//! Full-screen terminal session guard.

use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};

/// Raw mode + alternate screen + hidden cursor for as long as it lives.
///
/// Raw mode also turns Ctrl-C into an ordinary key event, so interrupts
/// reach the animation loop instead of killing the process mid-frame.
/// Dropping the guard restores the terminal, including on error paths.
#[derive(Debug)]
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        tracing::debug!("terminal session started");
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Ignore errors: nothing sensible to do while tearing down
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        tracing::debug!("terminal session restored");
    }
}
