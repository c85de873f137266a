//! Draws one frame of the text block at the current position.

use std::io;

use crate::animation::AnimationState;
use crate::render::RenderSurface;
use crate::text::TextBlock;

/// Redraw the whole block onto `surface`.
///
/// Lines are centered vertically; each line starts at `state.position`.
/// Rows outside the screen are skipped here, columns are left to the
/// surface's bounds check.
pub fn draw_frame<S: RenderSurface + ?Sized>(
    surface: &mut S,
    block: &TextBlock,
    state: &AnimationState,
) -> io::Result<()> {
    surface.begin_frame();

    let top = state.start_row(block.line_count());
    let height = i32::from(state.screen_height);
    let width = i32::from(state.screen_width);

    for (offset, line) in block.lines().iter().enumerate() {
        let row = top + offset as i32;
        if row < 0 || row >= height {
            continue;
        }

        let mut col = state.position;
        'segments: for segment in line.segments() {
            for &byte in segment.text() {
                if col >= width {
                    break 'segments;
                }
                surface.set_cell(row, col, byte, segment.handle());
                col += 1;
            }
        }
    }

    surface.present_frame()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Direction, Repeat};
    use crate::render::GridSurface;
    use crate::text::{build_block, ColorPairRegistry, Limits};

    fn block(raw: &[u8]) -> TextBlock {
        let mut registry = ColorPairRegistry::default();
        build_block(raw, &mut registry, &Limits::default()).unwrap()
    }

    fn state_at(position: i32, width: u16, height: u16, block: &TextBlock) -> AnimationState {
        let mut state =
            AnimationState::new(Direction::Left, width, height, block.max_width(), Repeat::Infinite);
        state.position = position;
        state
    }

    #[test]
    fn draws_centered_lines() {
        let block = block(b"AB\nCD");
        let mut grid = GridSurface::new(4, 4);
        draw_frame(&mut grid, &block, &state_at(1, 4, 4, &block)).unwrap();
        assert_eq!(grid.to_text(), "....\n.AB.\n.CD.\n....");
        assert_eq!(grid.frames_presented(), 1);
    }

    #[test]
    fn clips_columns_on_both_edges() {
        let block = block(b"ABCDEF");
        let mut grid = GridSurface::new(3, 1);
        draw_frame(&mut grid, &block, &state_at(-2, 3, 1, &block)).unwrap();
        assert_eq!(grid.to_text(), "CDE");
    }

    #[test]
    fn clips_rows_when_block_is_taller_than_screen() {
        let block = block(b"1\n2\n3\n4\n5");
        let mut grid = GridSurface::new(1, 3);
        draw_frame(&mut grid, &block, &state_at(0, 1, 3, &block)).unwrap();
        assert_eq!(grid.to_text(), "2\n3\n4");
    }

    #[test]
    fn offscreen_position_draws_nothing() {
        let block = block(b"hello");
        let mut grid = GridSurface::new(5, 1);
        draw_frame(&mut grid, &block, &state_at(5, 5, 1, &block)).unwrap();
        assert_eq!(grid.to_text(), ".....");
        draw_frame(&mut grid, &block, &state_at(-5, 5, 1, &block)).unwrap();
        assert_eq!(grid.to_text(), ".....");
    }

    #[test]
    fn cells_keep_segment_handles() {
        let mut registry = ColorPairRegistry::default();
        let block = build_block(b"a\x1b[31mb", &mut registry, &Limits::default()).unwrap();
        let mut grid = GridSurface::new(2, 1);
        draw_frame(&mut grid, &block, &state_at(0, 2, 1, &block)).unwrap();
        assert_eq!(grid.cell(0, 0).map(|c| c.1), Some(registry.lookup_or_create(7, -1)));
        assert_eq!(grid.cell(0, 1).map(|c| c.1), Some(registry.lookup_or_create(1, -1)));
    }
}
