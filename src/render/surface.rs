//! Terminal render surface.
//!
//! Buffers one frame of cells and writes it as a single string of ANSI
//! sequences, one cursor move per row, to minimize syscalls.

use std::io::{self, Write};

use crate::render::ansi::{pair_to_ansi, printable};
use crate::render::{cell_index, RenderSurface};
use crate::text::{ColorHandle, ColorPair};

/// Render surface writing ANSI output to a terminal.
#[derive(Debug)]
pub struct TerminalSurface<W: Write> {
    out: W,
    /// Pair for each handle, indexed by handle
    palette: Vec<ColorPair>,
    width: u16,
    height: u16,
    /// Fixed bounds instead of asking the terminal (non-tty writers)
    fixed_size: Option<(u16, u16)>,
    cells: Vec<Option<(u8, ColorHandle)>>,
}

impl TerminalSurface<io::Stdout> {
    /// Surface on stdout, sized to the current terminal.
    ///
    /// # Arguments
    /// * `palette` - Color pairs by handle, from `ColorPairRegistry::palette`
    pub fn stdout(palette: Vec<ColorPair>) -> io::Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self::build(io::stdout(), palette, width, height, None))
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Surface on an arbitrary writer with fixed bounds.
    pub fn with_writer(out: W, palette: Vec<ColorPair>, width: u16, height: u16) -> Self {
        Self::build(out, palette, width, height, Some((width, height)))
    }

    fn build(
        out: W,
        palette: Vec<ColorPair>,
        width: u16,
        height: u16,
        fixed_size: Option<(u16, u16)>,
    ) -> Self {
        Self {
            out,
            palette,
            width,
            height,
            fixed_size,
            cells: vec![None; usize::from(width) * usize::from(height)],
        }
    }

    /// Adopt new bounds; the cell buffer always matches them.
    fn apply_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clear_cells();
    }

    fn clear_cells(&mut self) {
        let len = usize::from(self.width) * usize::from(self.height);
        self.cells.clear();
        self.cells.resize(len, None);
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn pair(&self, handle: ColorHandle) -> ColorPair {
        self.palette
            .get(handle.index())
            .copied()
            .unwrap_or(ColorPair::DEFAULT)
    }

    /// Build the ANSI output for the buffered frame.
    ///
    /// Every row is rewritten in full so no stale content survives;
    /// styles are only re-emitted when the handle changes.
    pub fn render_frame(&self) -> String {
        let width = usize::from(self.width);
        let mut output = String::with_capacity(self.cells.len() * 2);

        for (row, cells) in self.cells.chunks(width.max(1)).enumerate() {
            output.push_str(&format!("\x1b[{};1H", row + 1));
            let mut current = ColorHandle::DEFAULT;

            for cell in cells {
                match cell {
                    Some((byte, handle)) => {
                        if *handle != current {
                            pair_to_ansi(self.pair(*handle), &mut output);
                            current = *handle;
                        }
                        output.push(printable(*byte));
                    }
                    None => {
                        if current != ColorHandle::DEFAULT {
                            output.push_str("\x1b[0m");
                            current = ColorHandle::DEFAULT;
                        }
                        output.push(' ');
                    }
                }
            }

            if current != ColorHandle::DEFAULT {
                output.push_str("\x1b[0m");
            }
        }
        output
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn bounds(&mut self) -> io::Result<(u16, u16)> {
        let (width, height) = match self.fixed_size {
            Some(size) => size,
            None => crossterm::terminal::size()?,
        };
        if (width, height) != (self.width, self.height) {
            tracing::debug!(width, height, "terminal resized");
            self.apply_size(width, height);
        }
        Ok((width, height))
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
        let output = self.render_frame();
        write!(self.out, "{}", output)?;
        self.out.flush()
    }
}
