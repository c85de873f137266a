//! Styled text data types.
//!
//! Contains the data structures produced by the escape-sequence parser:
//! - ColorHandle: opaque id of a registered (fg, bg) pair
//! - TextSegment: a run of bytes sharing one style
//! - MarqueeLine: the ordered segments of one input line
//! - TextBlock: all lines of the input plus the widest line width
//! - Limits: capacity ceilings and what to do when one is hit

/// Maximum number of lines kept from the input.
pub const MAX_LINES: usize = 256;

/// Maximum number of styled segments per line.
pub const MAX_SEGMENTS_PER_LINE: usize = 128;

/// Maximum number of visible bytes in one segment.
pub const MAX_SEGMENT_WIDTH: usize = 512;

/// Opaque handle for a registered (foreground, background) pair.
///
/// Handle 0 is reserved for the terminal's default style and is what
/// every lookup falls back to when the registry cannot serve a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ColorHandle(pub u16);

impl ColorHandle {
    /// The default/fallback style.
    pub const DEFAULT: Self = Self(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What happens when a capacity ceiling is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Silently drop whatever no longer fits (bytes, segments, lines, pairs)
    #[default]
    Truncate,
    /// Fail with `MarqueeError::CapacityExceeded`
    Strict,
}

/// Capacity ceilings for parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_lines: usize,
    pub max_segments_per_line: usize,
    pub max_segment_width: usize,
    pub policy: CapacityPolicy,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_lines: MAX_LINES,
            max_segments_per_line: MAX_SEGMENTS_PER_LINE,
            max_segment_width: MAX_SEGMENT_WIDTH,
            policy: CapacityPolicy::Truncate,
        }
    }
}

impl Limits {
    pub fn is_strict(&self) -> bool {
        self.policy == CapacityPolicy::Strict
    }
}

/// A maximal run of bytes drawn with one color pair.
///
/// Content is single-byte, so the visible width is the byte length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    text: Vec<u8>,
    handle: ColorHandle,
}

impl TextSegment {
    pub fn new(handle: ColorHandle) -> Self {
        Self {
            text: Vec::new(),
            handle,
        }
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.text.len()
    }

    pub fn handle(&self) -> ColorHandle {
        self.handle
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn set_handle(&mut self, handle: ColorHandle) {
        self.handle = handle;
    }

    pub(crate) fn push(&mut self, byte: u8) {
        self.text.push(byte);
    }
}

/// One parsed input line: ordered segments and their summed width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarqueeLine {
    segments: Vec<TextSegment>,
    total_width: usize,
}

impl MarqueeLine {
    pub fn segments(&self) -> &[TextSegment] {
        &self.segments
    }

    pub fn total_width(&self) -> usize {
        self.total_width
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Visible content of the line with all styling removed.
    pub fn plain_text(&self) -> Vec<u8> {
        self.segments
            .iter()
            .flat_map(|seg| seg.text().iter().copied())
            .collect()
    }

    pub(crate) fn push(&mut self, segment: TextSegment) {
        self.total_width += segment.width();
        self.segments.push(segment);
    }
}

/// The whole parsed input. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBlock {
    lines: Vec<MarqueeLine>,
    max_width: usize,
}

impl TextBlock {
    pub(crate) fn from_parts(lines: Vec<MarqueeLine>, max_width: usize) -> Self {
        Self { lines, max_width }
    }

    pub fn lines(&self) -> &[MarqueeLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Widest line in visible cells; the animation wraps on this.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
