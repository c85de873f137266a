//! Escape-sequence parser.
//!
//! Turns one raw input line into a [`MarqueeLine`]. Only SGR (`CSI ... m`)
//! sequences are interpreted:
//! - Reset (0)
//! - Standard foreground/background colors (30-37, 40-47)
//! - Extended colors - 256-color mode (38;5;n, 48;5;n)
//! - Extended colors - RGB mode (38;2;r;g;b, 48;2;r;g;b), quantized to 256 colors
//!
//! Any other CSI sequence is consumed without effect, and so is an
//! unterminated one (it swallows the rest of the line). Parsing never
//! fails in truncate mode.

use crate::error::{MarqueeError, Resource, Result};
use crate::text::color::quantize;
use crate::text::registry::{ColorPairRegistry, DEFAULT_COLOR};
use crate::text::types::{ColorHandle, Limits, MarqueeLine, TextSegment};

const ESC: u8 = 0x1b;

/// Foreground used until the line selects another one (palette white).
pub const DEFAULT_FG: i32 = 7;
/// Background used until the line selects another one.
pub const DEFAULT_BG: i32 = DEFAULT_COLOR;

/// Current (fg, bg) selection while scanning a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Style {
    fg: i32,
    bg: i32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
        }
    }
}

impl Style {
    /// Apply the `;`-separated parameter list of one SGR sequence.
    fn apply_sgr(&mut self, params: &[u8]) {
        let mut codes = params
            .split(|&b| b == b';')
            .filter(|token| !token.is_empty())
            .map(parse_int);

        while let Some(code) = codes.next() {
            match code {
                Some(0) => *self = Self::default(),
                Some(n @ 30..=37) => self.fg = n - 30,
                Some(n @ 40..=47) => self.bg = n - 40,
                Some(plane @ (38 | 48)) => {
                    if let Some(color) = extended_color(&mut codes) {
                        if plane == 38 {
                            self.fg = color;
                        } else {
                            self.bg = color;
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// Read the tail of a `38;...`/`48;...` form.
///
/// Consumes the selector and as many of its arguments as are present,
/// even when the result is unusable.
fn extended_color(codes: &mut impl Iterator<Item = Option<i32>>) -> Option<i32> {
    match codes.next()?? {
        5 => codes.next()?,
        2 => {
            let r = codes.next()?;
            let g = codes.next()?;
            let b = codes.next()?;
            Some(i32::from(quantize(r?, g?, b?)))
        }
        _ => None,
    }
}

fn parse_int(token: &[u8]) -> Option<i32> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

/// A lexical unit of a raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// A byte to display
    Literal(u8),
    /// Parameter bytes of a `CSI ... m` sequence
    Sgr(&'a [u8]),
    /// Any other CSI sequence, or an unterminated one
    Control,
}

/// Splits a raw line into tokens without copying.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = *self.bytes.get(self.pos)?;

        if byte != ESC || self.bytes.get(self.pos + 1) != Some(&b'[') {
            self.pos += 1;
            return Some(Token::Literal(byte));
        }

        // CSI: scan for the first alphabetic terminator
        let start = self.pos + 2;
        let rest = &self.bytes[start..];
        match rest.iter().position(u8::is_ascii_alphabetic) {
            Some(offset) => {
                let end = start + offset;
                self.pos = end + 1;
                if self.bytes[end] == b'm' {
                    Some(Token::Sgr(&self.bytes[start..end]))
                } else {
                    Some(Token::Control)
                }
            }
            None => {
                self.pos = self.bytes.len();
                Some(Token::Control)
            }
        }
    }
}

fn style_handle(
    registry: &mut ColorPairRegistry,
    limits: &Limits,
    style: Style,
) -> Result<ColorHandle> {
    if limits.is_strict() {
        registry.try_lookup_or_create(style.fg, style.bg)
    } else {
        Ok(registry.lookup_or_create(style.fg, style.bg))
    }
}

/// Parse one line of raw text into styled segments.
///
/// Concatenating the segment texts gives back `raw` with every escape
/// sequence removed (up to the capacity ceilings in `limits`). A line
/// without visible bytes has no segments.
///
/// # Errors
/// Only in strict mode: `CapacityExceeded` when a segment, the line's
/// segment list, or the color registry would overflow.
pub fn parse_line(
    raw: &[u8],
    registry: &mut ColorPairRegistry,
    limits: &Limits,
) -> Result<MarqueeLine> {
    let mut line = MarqueeLine::default();
    let mut style = Style::default();
    let mut current = TextSegment::new(style_handle(registry, limits, style)?);
    // Set once the segment list is at capacity; nothing more is recorded.
    let mut full = false;

    for token in Scanner::new(raw) {
        match token {
            Token::Literal(byte) => {
                if full {
                    if limits.is_strict() {
                        return Err(MarqueeError::capacity(
                            Resource::SegmentsPerLine,
                            limits.max_segments_per_line,
                        ));
                    }
                    tracing::debug!(
                        limit = limits.max_segments_per_line,
                        "segment limit reached, dropping rest of line"
                    );
                    break;
                }
                if current.width() < limits.max_segment_width {
                    current.push(byte);
                } else if limits.is_strict() {
                    return Err(MarqueeError::capacity(
                        Resource::SegmentWidth,
                        limits.max_segment_width,
                    ));
                }
            }
            Token::Sgr(params) if !full => {
                style.apply_sgr(params);
                if current.is_empty() {
                    current.set_handle(style_handle(registry, limits, style)?);
                } else if line.segments().len() + 1 >= limits.max_segments_per_line {
                    line.push(std::mem::replace(
                        &mut current,
                        TextSegment::new(ColorHandle::DEFAULT),
                    ));
                    full = true;
                } else {
                    let next = TextSegment::new(style_handle(registry, limits, style)?);
                    line.push(std::mem::replace(&mut current, next));
                }
            }
            Token::Sgr(_) | Token::Control => {}
        }
    }

    if !current.is_empty() {
        line.push(current);
    }
    Ok(line)
}
