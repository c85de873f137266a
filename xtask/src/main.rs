//! Development tasks for marquee.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for marquee")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render the marquee(1) man page into target/man/
    Man {
        /// Output directory (defaults to target/man)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => {
            let out_dir = out_dir.unwrap_or_else(|| workspace_root().join("target").join("man"));
            let path = generate_man_page(&out_dir)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn generate_man_page(out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let command = marquee::cli::Cli::command();
    let mut buffer = Vec::new();
    clap_mangen::Man::new(command)
        .render(&mut buffer)
        .context("Failed to render man page")?;

    let path = out_dir.join("marquee.1");
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
