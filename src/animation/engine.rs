//! The marquee tick loop.
//!
//! One tick: poll input, react to cancellation and resizes, draw the
//! frame, advance the position, sleep. Single-threaded and cooperative;
//! cancellation is only observed at tick boundaries.

use crate::animation::clock::Clock;
use crate::animation::policy::{AnimationConfig, CancellationPolicy};
use crate::animation::state::AnimationState;
use crate::error::Result;
use crate::input::{InputEvent, InputSource};
use crate::render::{draw_frame, RenderSurface};
use crate::text::TextBlock;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The repeat count ran out
    Completed,
    /// A quit key or an honoured interrupt stopped the run
    Cancelled,
}

/// Drives a [`TextBlock`] across a render surface.
#[derive(Debug)]
pub struct AnimationEngine<'a, S, I, C> {
    block: &'a TextBlock,
    config: AnimationConfig,
    policy: CancellationPolicy,
    state: AnimationState,
    surface: S,
    input: I,
    clock: C,
    ticks: u64,
}

impl<'a, S, I, C> AnimationEngine<'a, S, I, C>
where
    S: RenderSurface,
    I: InputSource,
    C: Clock,
{
    /// Create an engine, sizing the initial state from the surface bounds.
    ///
    /// # Errors
    /// Fails if the surface cannot report its bounds.
    pub fn new(
        block: &'a TextBlock,
        config: AnimationConfig,
        mut surface: S,
        input: I,
        clock: C,
    ) -> Result<Self> {
        let (width, height) = surface.bounds()?;
        let state = AnimationState::new(
            config.direction,
            width,
            height,
            block.max_width(),
            config.repeat,
        );
        let policy = config.cancellation_policy();
        if config.suppression_refused() {
            tracing::warn!(repeat = ?config.repeat, "interrupt suppression refused for long run");
        }

        Ok(Self {
            block,
            config,
            policy,
            state,
            surface,
            input,
            clock,
            ticks: 0,
        })
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn policy(&self) -> CancellationPolicy {
        self.policy
    }

    /// Frames drawn so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one tick.
    ///
    /// Returns `Some(outcome)` once the run is over; no frame is drawn in
    /// that case.
    ///
    /// # Errors
    /// Propagates I/O failures from the input source or surface.
    pub fn tick(&mut self) -> Result<Option<RunOutcome>> {
        if self.state.is_finished() {
            return Ok(Some(RunOutcome::Completed));
        }

        let mut resized = false;
        while let Some(event) = self.input.poll_event()? {
            match event {
                event if event.is_quit_key() => {
                    tracing::info!(ticks = self.ticks, "quit key pressed");
                    return Ok(Some(RunOutcome::Cancelled));
                }
                InputEvent::Interrupt => match self.policy {
                    CancellationPolicy::Interruptible => {
                        tracing::info!(ticks = self.ticks, "interrupted");
                        return Ok(Some(RunOutcome::Cancelled));
                    }
                    CancellationPolicy::IgnoreInterrupts => {
                        tracing::debug!("interrupt ignored");
                    }
                },
                InputEvent::Resize => resized = true,
                InputEvent::Key(_) => {}
            }
        }

        if resized {
            let (width, height) = self.surface.bounds()?;
            tracing::debug!(width, height, "resize");
            self.state.resize(width, height);
        }

        draw_frame(&mut self.surface, self.block, &self.state)?;
        self.ticks += 1;

        if self.state.advance() {
            tracing::debug!(remaining = ?self.state.repeats_remaining, "traversal complete");
        }

        self.clock.sleep(self.config.tick_delay);
        Ok(None)
    }

    /// Tick until the run ends.
    ///
    /// # Errors
    /// Propagates I/O failures from the input source or surface.
    pub fn run(&mut self) -> Result<RunOutcome> {
        loop {
            if let Some(outcome) = self.tick()? {
                tracing::info!(?outcome, ticks = self.ticks, "animation finished");
                return Ok(outcome);
            }
        }
    }
}
