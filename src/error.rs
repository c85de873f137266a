//! Error types for marquee.

use std::collections::TryReserveError;
use std::fmt;

/// A bounded resource whose ceiling was hit in strict mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Visible bytes in a single segment
    SegmentWidth,
    /// Segments in a single line
    SegmentsPerLine,
    /// Lines in a text block
    Lines,
    /// Registered (fg, bg) color pairs
    ColorPairs,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SegmentWidth => "segment width",
            Self::SegmentsPerLine => "segments per line",
            Self::Lines => "lines per block",
            Self::ColorPairs => "color pairs",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while preparing or running a marquee.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Capacity exceeded: {resource} (limit {limit})")]
    CapacityExceeded { resource: Resource, limit: usize },

    #[error("No input text. Pass text as arguments or pipe it via stdin.")]
    NoInput,

    #[error("Failed to allocate text block buffers: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl MarqueeError {
    pub(crate) fn capacity(resource: Resource, limit: usize) -> Self {
        Self::CapacityExceeded { resource, limit }
    }
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, MarqueeError>;
