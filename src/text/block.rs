//! Splits a raw multi-line buffer into parsed lines.

use crate::error::{MarqueeError, Resource, Result};
use crate::text::parser::parse_line;
use crate::text::registry::ColorPairRegistry;
use crate::text::types::{Limits, TextBlock};

/// Split `raw` into lines on `\n` without copying.
///
/// Runs of `\n` count as one boundary, so blank lines (leading, inner or
/// trailing) produce nothing. Only the line feed terminates a line; a
/// `\r` stays in the line as content.
pub fn split_lines(raw: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    raw.split(|&b| b == b'\n').filter(|line| !line.is_empty())
}

/// Parse every line of `raw` into a [`TextBlock`].
///
/// Lines beyond `limits.max_lines` are dropped (or rejected in strict
/// mode). The block's `max_width` is the widest parsed line.
///
/// # Errors
/// - `Allocation` if the line buffer cannot be reserved
/// - `CapacityExceeded` in strict mode when any ceiling is hit
pub fn build_block(
    raw: &[u8],
    registry: &mut ColorPairRegistry,
    limits: &Limits,
) -> Result<TextBlock> {
    let expected = raw.iter().filter(|&&b| b == b'\n').count() + 1;
    let mut lines = Vec::new();
    lines.try_reserve_exact(expected.min(limits.max_lines))?;

    let mut max_width = 0;
    for raw_line in split_lines(raw) {
        if lines.len() == limits.max_lines {
            if limits.is_strict() {
                return Err(MarqueeError::capacity(Resource::Lines, limits.max_lines));
            }
            tracing::warn!(limit = limits.max_lines, "line limit reached, dropping remaining input");
            break;
        }
        let line = parse_line(raw_line, registry, limits)?;
        max_width = max_width.max(line.total_width());
        lines.push(line);
    }

    tracing::info!(
        lines = lines.len(),
        max_width,
        color_pairs = registry.len(),
        "built text block"
    );
    Ok(TextBlock::from_parts(lines, max_width))
}
