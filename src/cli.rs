//! Command-line interface definition.
//!
//! Lives in the library so the `xtask` man page generator can reuse it.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::animation::policy::{AnimationConfig, Direction, Repeat};
use crate::config::Config;
use crate::text::Limits;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("MARQUEE_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("MARQUEE_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = r#"EXAMPLES:
  # Scroll simple text from command-line arguments (runs once by default).
  marquee "Hello, world!"

  # Scroll multi-line text from arguments using $'...' syntax for newlines.
  marquee $'First line\nSecond line' --count 2

  # Scroll from left to right, slowly, and loop infinitely.
  marquee --reverse --speed 200000 --loop "Slowly to the right..."

  # Scroll colored text piped from 'echo'.
  echo -e "\x1b[31mRED\x1b[0m, \x1b[32mGREEN\x1b[0m, and \x1b[34mBLUE\x1b[0m" | marquee -l

  # Scroll ASCII art from 'figlet' (if installed).
  figlet "Marquee" | marquee --loop --speed 120000

Press 'q' to stop."#;

/// Displays multi-line text as a scrolling marquee in the terminal.
///
/// Text can be provided as arguments (use $'...' for newlines), or piped via stdin.
#[derive(Debug, Parser)]
#[command(name = "marquee", version = VERSION, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Text to scroll; each argument becomes its own line
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Scroll <N> times [default: 1]
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Set animation delay in microseconds [default: 100000]
    #[arg(short, long, value_name = "USEC")]
    pub speed: Option<u64>,

    /// Scroll from left to right
    #[arg(short, long)]
    pub reverse: bool,

    /// Scroll infinitely
    #[arg(short = 'l', long = "loop", conflicts_with = "count")]
    pub infinite: bool,

    /// Ignore Ctrl-C interruptions (only for up to 10 repeats)
    #[arg(short, long)]
    pub accident: bool,

    /// Fail instead of truncating input that exceeds the parser limits
    #[arg(long)]
    pub strict: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge flags over the config file into the engine configuration.
    pub fn animation_config(&self, config: &Config) -> AnimationConfig {
        let defaults = &config.animation;
        let direction = if self.reverse {
            Direction::Right
        } else {
            defaults.direction
        };
        let repeat = if self.infinite {
            Repeat::Infinite
        } else {
            Repeat::Finite(self.count.unwrap_or(defaults.count))
        };

        AnimationConfig {
            direction,
            tick_delay: Duration::from_micros(self.speed.unwrap_or(defaults.speed_us)),
            repeat,
            suppress_cancellation: self.accident,
        }
    }

    /// Parser limits from the config file, with `--strict` applied.
    pub fn limits(&self, config: &Config) -> Limits {
        config.limits(self.strict)
    }
}
