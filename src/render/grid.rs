//! In-memory render surface.
//!
//! Keeps the last frame as a grid of cells instead of writing to a
//! terminal. Used for headless runs and to inspect frames in tests.

use std::io;

use crate::render::{cell_index, printable, RenderSurface};
use crate::text::ColorHandle;

/// A cell: the byte drawn and its color handle.
pub type GridCell = (u8, ColorHandle);

/// Render surface backed by a `Vec` of cells.
#[derive(Debug, Clone)]
pub struct GridSurface {
    width: u16,
    height: u16,
    cells: Vec<Option<GridCell>>,
    frames_presented: usize,
}

impl GridSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; usize::from(width) * usize::from(height)],
            frames_presented: 0,
        }
    }

    /// Change the bounds. The grid is cleared to the new size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clear_cells();
    }

    fn clear_cells(&mut self) {
        let len = usize::from(self.width) * usize::from(self.height);
        self.cells.clear();
        self.cells.resize(len, None);
    }

    pub fn cell(&self, row: i32, col: i32) -> Option<GridCell> {
        let idx = cell_index(row, col, self.width, self.height)?;
        self.cells.get(idx).copied().flatten()
    }

    /// Number of completed `present_frame` calls.
    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    /// The grid as text, one line per row, `.` for empty cells.
    pub fn to_text(&self) -> String {
        let width = usize::from(self.width).max(1);
        self.cells
            .chunks(width)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', |(byte, _)| printable(byte)))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl RenderSurface for GridSurface {
    fn bounds(&mut self) -> io::Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn begin_frame(&mut self) {
        self.clear_cells();
    }

    fn set_cell(&mut self, row: i32, col: i32, byte: u8, handle: ColorHandle) {
        if let Some(cell) = cell_index(row, col, self.width, self.height)
            .and_then(|idx| self.cells.get_mut(idx))
        {
            *cell = Some((byte, handle));
        }
    }

    fn present_frame(&mut self) -> io::Result<()> {
        self.frames_presented += 1;
        Ok(())
    }
}
