//! Deduplicating registry of (foreground, background) color pairs.
//!
//! Every distinct pair gets a small, stable [`ColorHandle`]. Handles are
//! handed out sequentially from 1; handle 0 is the terminal default and
//! doubles as the fallback once the registry is full or a color is out of
//! range. The registry is an explicit object owned by the caller, so
//! independent renders never share state.

use crate::error::{MarqueeError, Resource, Result};
use crate::text::types::ColorHandle;

/// Palette value meaning "whatever the terminal uses by default".
pub const DEFAULT_COLOR: i32 = -1;

/// Number of pair slots (including the reserved slot 0) most terminals offer.
pub const DEFAULT_PAIR_CAPACITY: usize = 256;

/// A registered (foreground, background) combination.
///
/// Each plane is a palette index `0..=255` or [`DEFAULT_COLOR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub fg: i16,
    pub bg: i16,
}

impl ColorPair {
    /// The style behind handle 0.
    pub const DEFAULT: Self = Self {
        fg: DEFAULT_COLOR as i16,
        bg: DEFAULT_COLOR as i16,
    };
}

/// Maps color pairs to handles under a fixed slot capacity.
#[derive(Debug, Clone)]
pub struct ColorPairRegistry {
    /// Registered pairs; `pairs[i]` belongs to handle `i + 1`
    pairs: Vec<ColorPair>,
    /// Total slots including the reserved handle 0
    capacity: usize,
}

impl Default for ColorPairRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_PAIR_CAPACITY)
    }
}

impl ColorPairRegistry {
    /// Create a registry with `capacity` slots, slot 0 included.
    ///
    /// A capacity of 0 or 1 leaves no assignable handles; every lookup
    /// then resolves to handle 0. Capacity is capped at `u16::MAX`.
    pub fn new(capacity: usize) -> Self {
        Self {
            pairs: Vec::new(),
            capacity: capacity.min(u16::MAX as usize),
        }
    }

    /// Return the handle for `(fg, bg)`, registering it if needed.
    ///
    /// Out-of-range colors and a full registry both yield
    /// [`ColorHandle::DEFAULT`].
    pub fn lookup_or_create(&mut self, fg: i32, bg: i32) -> ColorHandle {
        match self.try_lookup_or_create(fg, bg) {
            Ok(handle) => handle,
            Err(_) => {
                tracing::debug!(fg, bg, "color pair registry full, using default style");
                ColorHandle::DEFAULT
            }
        }
    }

    /// Like [`lookup_or_create`](Self::lookup_or_create), but reports a
    /// full registry as `CapacityExceeded` instead of falling back.
    ///
    /// # Errors
    /// Returns `MarqueeError::CapacityExceeded` when a new pair is needed
    /// and every slot is taken.
    pub fn try_lookup_or_create(&mut self, fg: i32, bg: i32) -> Result<ColorHandle> {
        let (Some(fg), Some(bg)) = (palette_value(fg), palette_value(bg)) else {
            return Ok(ColorHandle::DEFAULT);
        };
        let key = ColorPair { fg, bg };

        if let Some(pos) = self.pairs.iter().position(|p| *p == key) {
            return Ok(handle_at(pos));
        }

        if self.pairs.len() + 1 < self.capacity {
            self.pairs.push(key);
            return Ok(handle_at(self.pairs.len() - 1));
        }

        Err(MarqueeError::capacity(
            Resource::ColorPairs,
            self.capacity.saturating_sub(1),
        ))
    }

    /// Resolve a handle back to its pair. Handle 0 is the default pair.
    pub fn pair(&self, handle: ColorHandle) -> Option<ColorPair> {
        match handle.index() {
            0 => Some(ColorPair::DEFAULT),
            n => self.pairs.get(n - 1).copied(),
        }
    }

    /// All pairs in handle order, starting with the default pair at 0.
    pub fn palette(&self) -> Vec<ColorPair> {
        std::iter::once(ColorPair::DEFAULT)
            .chain(self.pairs.iter().copied())
            .collect()
    }

    /// Number of registered pairs (handle 0 not counted).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget every registration; the next new pair gets handle 1 again.
    pub fn reset(&mut self) {
        self.pairs.clear();
    }
}

/// Validate a palette value (`-1..=255`).
fn palette_value(color: i32) -> Option<i16> {
    if (DEFAULT_COLOR..=255).contains(&color) {
        Some(color as i16)
    } else {
        None
    }
}

fn handle_at(pos: usize) -> ColorHandle {
    // pos + 1 < capacity <= u16::MAX
    ColorHandle((pos + 1) as u16)
}
