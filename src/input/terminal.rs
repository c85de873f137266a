//! Terminal input source backed by crossterm.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event;

use crate::input::{map_event, InputEvent, InputSource};

/// Reads pending key and resize events without blocking.
#[derive(Debug)]
pub struct CrosstermInput {
    interrupted: Arc<AtomicBool>,
}

impl CrosstermInput {
    /// # Arguments
    /// * `interrupted` - Flag set by the OS signal handler
    pub fn new(interrupted: Arc<AtomicBool>) -> Self {
        Self { interrupted }
    }
}

impl InputSource for CrosstermInput {
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return Ok(Some(InputEvent::Interrupt));
        }
        while event::poll(Duration::ZERO)? {
            if let Some(mapped) = map_event(event::read()?) {
                return Ok(Some(mapped));
            }
        }
        Ok(None)
    }
}
