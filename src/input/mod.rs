//! Input handling for the marquee.
//!
//! The engine polls an [`InputSource`] once per tick, without blocking.
//! Real terminals are read through crossterm; OS interrupt signals are
//! folded in through a `signal-hook` flag.

mod keyboard;
mod script;
mod signal;
mod terminal;

use std::io;

pub use keyboard::map_event;
pub use script::ScriptedInput;
pub use signal::register_interrupt_flag;
pub use terminal::CrosstermInput;

/// An input the animation loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A printable key press
    Key(char),
    /// Ctrl-C, SIGINT or SIGTERM
    Interrupt,
    /// The terminal changed size; bounds must be re-queried
    Resize,
}

impl InputEvent {
    /// `q` and `Q` always end the run.
    pub fn is_quit_key(self) -> bool {
        matches!(self, Self::Key('q' | 'Q'))
    }
}

/// Non-blocking source of input events.
pub trait InputSource {
    /// Next pending event, or `None` if nothing is waiting.
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>>;
}
