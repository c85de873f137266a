//! Configuration file support.
//!
//! Loads `<config_dir>/marquee/config.toml`. Every field is optional;
//! anything missing falls back to the built-in default.
//!
//! ```toml
//! [animation]
//! speed_us = 100000
//! count = 1
//! direction = "left"
//!
//! [limits]
//! max_lines = 256
//! max_segments_per_line = 128
//! max_segment_width = 512
//! max_color_pairs = 256
//! strict = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animation::policy::{Direction, DEFAULT_TICK_DELAY_US};
use crate::error::Result;
use crate::text::registry::DEFAULT_PAIR_CAPACITY;
use crate::text::types::{
    CapacityPolicy, Limits, MAX_LINES, MAX_SEGMENTS_PER_LINE, MAX_SEGMENT_WIDTH,
};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub animation: AnimationSection,
    pub limits: LimitsSection,
}

/// `[animation]` defaults, overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSection {
    /// Delay between frames in microseconds
    pub speed_us: u64,
    /// Number of traversals
    pub count: u32,
    pub direction: Direction,
}

impl Default for AnimationSection {
    fn default() -> Self {
        Self {
            speed_us: DEFAULT_TICK_DELAY_US,
            count: 1,
            direction: Direction::Left,
        }
    }
}

/// `[limits]` capacity ceilings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsSection {
    pub max_lines: usize,
    pub max_segments_per_line: usize,
    pub max_segment_width: usize,
    /// Color pair slots, including the reserved default pair
    pub max_color_pairs: usize,
    /// Fail instead of truncating when a ceiling is hit
    pub strict: bool,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_lines: MAX_LINES,
            max_segments_per_line: MAX_SEGMENTS_PER_LINE,
            max_segment_width: MAX_SEGMENT_WIDTH,
            max_color_pairs: DEFAULT_PAIR_CAPACITY,
            strict: false,
        }
    }
}

impl Config {
    /// Path of the default config file, if the platform has a config dir.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("marquee").join("config.toml"))
    }

    /// Load the default config file. A missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load a specific config file.
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not valid TOML for this schema.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config from a TOML string.
    ///
    /// # Errors
    /// Fails on invalid TOML or wrongly typed fields.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Capacity limits, with `strict` overriding the file's setting when set.
    pub fn limits(&self, strict: bool) -> Limits {
        let section = &self.limits;
        Limits {
            max_lines: section.max_lines,
            max_segments_per_line: section.max_segments_per_line.max(1),
            max_segment_width: section.max_segment_width,
            policy: if strict || section.strict {
                CapacityPolicy::Strict
            } else {
                CapacityPolicy::Truncate
            },
        }
    }
}
