//! Marquee - scroll multi-line, ANSI-colored text across the terminal.
//!
//! The pipeline runs one way:
//!
//! 1. [`source`] acquires the raw bytes (arguments or piped stdin)
//! 2. [`text`] parses them into styled lines, registering color pairs
//! 3. [`animation`] moves the block across a [`render::RenderSurface`],
//!    polling an [`input::InputSource`] between frames
//!
//! # Usage
//!
//! ```
//! use marquee::animation::{AnimationConfig, AnimationEngine, ManualClock, RunOutcome};
//! use marquee::input::ScriptedInput;
//! use marquee::render::GridSurface;
//! use marquee::text::{build_block, ColorPairRegistry, Limits};
//!
//! let mut registry = ColorPairRegistry::default();
//! let block = build_block(b"A\nB\nC", &mut registry, &Limits::default()).unwrap();
//!
//! let mut engine = AnimationEngine::new(
//!     &block,
//!     AnimationConfig::default(),
//!     GridSurface::new(10, 5),
//!     ScriptedInput::idle(),
//!     ManualClock::default(),
//! )
//! .unwrap();
//! assert_eq!(engine.run().unwrap(), RunOutcome::Completed);
//! ```

pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod source;
pub mod text;

pub use config::Config;
pub use error::{MarqueeError, Result};
