//! Animation state management
//!
//! Contains the `AnimationState` struct: horizontal position of the text
//! block, current screen bounds, and the remaining repeat count.

use crate::animation::policy::{Direction, Repeat};

/// Mutable state of one marquee run.
///
/// Created from the configuration and the detected screen bounds, then
/// advanced once per tick by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    /// Column of the block's left edge; may be negative or past the screen
    pub position: i32,
    /// Current terminal width
    pub screen_width: u16,
    /// Current terminal height
    pub screen_height: u16,
    /// Traversals left before the run ends
    pub repeats_remaining: Repeat,
    direction: Direction,
    block_width: i32,
}

impl AnimationState {
    /// Create the initial state for a block `block_width` cells wide.
    ///
    /// Leftward runs start just past the right edge, rightward runs start
    /// with the block fully hidden beyond the left edge.
    pub fn new(
        direction: Direction,
        screen_width: u16,
        screen_height: u16,
        block_width: usize,
        repeat: Repeat,
    ) -> Self {
        let block_width = i32::try_from(block_width).unwrap_or(i32::MAX);
        let position = match direction {
            Direction::Left => i32::from(screen_width),
            Direction::Right => -block_width,
        };

        Self {
            position,
            screen_width,
            screen_height,
            repeats_remaining: repeat,
            direction,
            block_width,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Handle a terminal resize. Position is kept as is.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// First screen row of a block of `line_count` lines, centered vertically.
    ///
    /// Negative when the block is taller than the screen.
    pub fn start_row(&self, line_count: usize) -> i32 {
        let lines = i32::try_from(line_count).unwrap_or(i32::MAX);
        (i32::from(self.screen_height) - lines) / 2
    }

    /// Move one column and wrap around once the block has left the screen.
    ///
    /// Returns `true` if this step wrapped (one traversal completed).
    pub fn advance(&mut self) -> bool {
        let width = i32::from(self.screen_width);
        let wrapped = match self.direction {
            Direction::Left => {
                self.position -= 1;
                if self.position < -self.block_width {
                    self.position = width;
                    true
                } else {
                    false
                }
            }
            Direction::Right => {
                self.position += 1;
                if self.position > width {
                    self.position = -self.block_width;
                    true
                } else {
                    false
                }
            }
        };

        if wrapped {
            self.repeats_remaining.consume();
        }
        wrapped
    }

    /// Terminal condition: a finite repeat count has run out.
    pub fn is_finished(&self) -> bool {
        self.repeats_remaining.is_exhausted()
    }

    /// Ticks needed for one full traversal at the current width.
    pub fn cycle_len(&self) -> u64 {
        // Every position from one edge to the other, both ends inclusive
        (i64::from(self.screen_width) + i64::from(self.block_width) + 1) as u64
    }
}
