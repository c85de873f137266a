use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use marquee::animation::{play, RunOutcome};
use marquee::cli::Cli;
use marquee::text::{build_block, ColorPairRegistry};
use marquee::{logging, source, Config, MarqueeError};

/// Pause after the safety warning so it can be read before the screen clears.
const WARNING_PAUSE: Duration = Duration::from_secs(2);

#[cfg(not(tarpaulin_include))]
fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init().context("Failed to open log file")?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };
    let animation = cli.animation_config(&config);
    let limits = cli.limits(&config);

    if animation.suppression_refused() {
        eprintln!("Warning: --accident (-a) is disabled for safety.");
        thread::sleep(WARNING_PAUSE);
    }

    let raw = match source::acquire(&cli.text) {
        Ok(raw) => raw,
        Err(MarqueeError::NoInput) => {
            Cli::command().print_help()?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("Failed to read input"),
    };

    let mut registry = ColorPairRegistry::new(config.limits.max_color_pairs);
    let block = build_block(&raw, &mut registry, &limits)?;
    if block.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    match play(&block, &registry, animation)? {
        RunOutcome::Completed => tracing::info!("marquee completed"),
        RunOutcome::Cancelled => tracing::info!("marquee cancelled"),
    }
    Ok(ExitCode::SUCCESS)
}
