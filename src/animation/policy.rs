//! Animation configuration and the cancellation safety rule.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Longest finite run for which interrupts may be suppressed.
pub const SAFE_REPEAT_LIMIT: u32 = 10;

/// Default delay between frames.
pub const DEFAULT_TICK_DELAY_US: u64 = 100_000;

/// Which way the text travels across the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Enter at the right edge, move leftwards
    #[default]
    Left,
    /// Enter at the left edge, move rightwards
    Right,
}

/// How many full traversals remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Finite(u32),
    Infinite,
}

impl Default for Repeat {
    fn default() -> Self {
        Self::Finite(1)
    }
}

impl Repeat {
    /// True once a finite count has run down to zero.
    pub fn is_exhausted(self) -> bool {
        self == Self::Finite(0)
    }

    /// Count one completed traversal. Infinite stays infinite.
    pub fn consume(&mut self) {
        if let Self::Finite(n) = self {
            *n = n.saturating_sub(1);
        }
    }
}

/// Whether an interrupt (Ctrl-C, SIGINT, SIGTERM) ends the run.
///
/// Quit keys always end the run regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationPolicy {
    Interruptible,
    IgnoreInterrupts,
}

/// Settings the animation engine runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    pub direction: Direction,
    pub tick_delay: Duration,
    pub repeat: Repeat,
    /// Requested interrupt suppression; see [`AnimationConfig::cancellation_policy`]
    pub suppress_cancellation: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            tick_delay: Duration::from_micros(DEFAULT_TICK_DELAY_US),
            repeat: Repeat::default(),
            suppress_cancellation: false,
        }
    }
}

impl AnimationConfig {
    /// Suppression is only safe for short, finite runs.
    pub fn suppression_allowed(&self) -> bool {
        matches!(self.repeat, Repeat::Finite(n) if n <= SAFE_REPEAT_LIMIT)
    }

    /// True when suppression was requested but will not be honoured.
    pub fn suppression_refused(&self) -> bool {
        self.suppress_cancellation && !self.suppression_allowed()
    }

    /// The policy actually in effect for this configuration.
    pub fn cancellation_policy(&self) -> CancellationPolicy {
        if self.suppress_cancellation && self.suppression_allowed() {
            CancellationPolicy::IgnoreInterrupts
        } else {
            CancellationPolicy::Interruptible
        }
    }
}
