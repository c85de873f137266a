//! OS interrupt adapter.
//!
//! Registers SIGINT and SIGTERM against a shared flag so a signal sent
//! from outside (e.g. `kill -INT`) is observed at the next tick instead of
//! terminating the process with the terminal still in raw mode.

use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};

/// Register the interrupt flag. It flips to `true` on SIGINT or SIGTERM.
pub fn register_interrupt_flag() -> io::Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&flag))?;
    }
    Ok(flag)
}
