//! Runs a marquee on the real terminal.

use crate::animation::clock::SystemClock;
use crate::animation::engine::{AnimationEngine, RunOutcome};
use crate::animation::policy::AnimationConfig;
use crate::error::Result;
use crate::input::{register_interrupt_flag, CrosstermInput};
use crate::render::{TerminalSession, TerminalSurface};
use crate::text::{ColorPairRegistry, TextBlock};

/// Play `block` full-screen until the repeat count runs out or the user quits.
///
/// The terminal is restored before this returns, on success and on error.
///
/// # Arguments
/// * `block` - The parsed text
/// * `registry` - The registry the block was parsed with (resolves color handles)
/// * `config` - Direction, speed, repeat count, interrupt policy
///
/// # Errors
/// Fails if the terminal cannot be set up or written to.
pub fn play(
    block: &TextBlock,
    registry: &ColorPairRegistry,
    config: AnimationConfig,
) -> Result<RunOutcome> {
    let interrupted = register_interrupt_flag()?;
    let _session = TerminalSession::start()?;

    let surface = TerminalSurface::stdout(registry.palette())?;
    let input = CrosstermInput::new(interrupted);
    let mut engine = AnimationEngine::new(block, config, surface, input, SystemClock)?;
    engine.run()
}
