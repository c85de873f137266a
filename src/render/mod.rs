//! Rendering components for the marquee.
//!
//! The engine only talks to a [`RenderSurface`]; this module provides the
//! trait, the per-frame drawing routine, a crossterm-backed surface for
//! real terminals, an in-memory grid for headless runs, and the guard that
//! puts the terminal into (and back out of) full-screen mode.

mod ansi;
mod frame;
mod grid;
mod session;
mod surface;

use std::io;

use crate::text::ColorHandle;

pub use ansi::{pair_to_ansi, printable};
pub use frame::draw_frame;
pub use grid::GridSurface;
pub use session::TerminalSession;
pub use surface::TerminalSurface;

/// A cell-addressed drawing target.
///
/// Coordinates are signed: callers may address cells outside the screen
/// and implementations must ignore them.
pub trait RenderSurface {
    /// Current `(width, height)` in cells.
    fn bounds(&mut self) -> io::Result<(u16, u16)>;

    /// Start a new, blank frame.
    fn begin_frame(&mut self);

    /// Put `byte` at `(row, col)` in the given style. No-op when out of bounds.
    fn set_cell(&mut self, row: i32, col: i32, byte: u8, handle: ColorHandle);

    /// Make the frame visible.
    fn present_frame(&mut self) -> io::Result<()>;
}

/// Flat index of `(row, col)` in a `width` x `height` grid, if inside it.
pub(crate) fn cell_index(row: i32, col: i32, width: u16, height: u16) -> Option<usize> {
    let row = usize::try_from(row).ok()?;
    let col = usize::try_from(col).ok()?;
    let (width, height) = (usize::from(width), usize::from(height));
    (row < height && col < width).then(|| row * width + col)
}
