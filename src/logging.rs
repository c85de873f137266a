//! Opt-in diagnostic logging.
//!
//! The marquee owns the terminal while it runs, so logs never go to
//! stdout/stderr. Set `MARQUEE_LOG_FILE` to a path to append logs there;
//! `MARQUEE_LOG` takes an `EnvFilter` directive (default `info`).

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "MARQUEE_LOG_FILE";
/// Environment variable holding the filter directive.
pub const LOG_FILTER_ENV: &str = "MARQUEE_LOG";

const DEFAULT_FILTER: &str = "info";

/// Build the filter from a directive string, falling back to `info`.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the file logger if `MARQUEE_LOG_FILE` is set.
///
/// Returns whether a subscriber was installed.
///
/// # Errors
/// Fails if the log file cannot be opened or a global subscriber exists.
pub fn init() -> io::Result<bool> {
    let Some(path) = env::var_os(LOG_FILE_ENV) else {
        return Ok(false);
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let directive = env::var(LOG_FILTER_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(true)
}
