//! Marquee animation module
//!
//! Moves a parsed [`TextBlock`](crate::text::TextBlock) across the screen:
//!
//! - `policy`: AnimationConfig, Direction, Repeat and the interrupt safety rule
//! - `state`: AnimationState, the position/wrap/repeat state machine
//! - `engine`: the tick loop over render, input and clock collaborators
//! - `clock`: the timing collaborator
//! - `native`: wiring for a real terminal
//!
//! # Usage
//!
//! ```no_run
//! use marquee::animation::{play, AnimationConfig, RunOutcome};
//! use marquee::text::{build_block, ColorPairRegistry, Limits};
//!
//! let mut registry = ColorPairRegistry::default();
//! let block = build_block(b"\x1b[31mHello\x1b[0m", &mut registry, &Limits::default()).unwrap();
//! match play(&block, &registry, AnimationConfig::default()).unwrap() {
//!     RunOutcome::Completed => println!("done"),
//!     RunOutcome::Cancelled => println!("stopped by user"),
//! }
//! ```

pub mod clock;
pub mod engine;
mod native;
pub mod policy;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{AnimationEngine, RunOutcome};
pub use native::play;
pub use policy::{AnimationConfig, CancellationPolicy, Direction, Repeat, SAFE_REPEAT_LIMIT};
pub use state::AnimationState;
