// src/main.rs
use std::{
    fs,
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result};
use chartab::{
    config::{Format, Options},
    driver,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Generate lexer character-classification tables for an encoding.
#[derive(Parser, Debug)]
#[command(name = "chartab", version)]
struct Args {
    /// Encoding name, e.g. UTF-8, windows-1252, Shift_JIS, US-ASCII.
    encoding: String,

    /// Output rendering.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Scan range categories one after another (also CHARTAB_SEQUENTIAL=1).
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let defaults = Options::from_env();
    let options = Options {
        format: args.format,
        parallel: defaults.parallel && !args.sequential,
    };

    match &args.output {
        Some(path) => {
            // Validate before creating the file so a bad encoding leaves nothing behind.
            driver::prepare_encoding(&args.encoding)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            let f = fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut w = BufWriter::new(f);
            driver::run(&args.encoding, &options, &mut w)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("[chartab] wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            driver::run(&args.encoding, &options, &mut stdout.lock())?;
        }
    }
    Ok(())
}
