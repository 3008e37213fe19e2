//! tmpl CLI
//!
//! Splices named sections of a source file into a template and writes the
//! result to standard output. Diagnostics go to standard error.

mod cli;
mod error;

use std::io::{self, IsTerminal};

use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;
use error::Result;
use tmpl_core::Substitutor;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    let config = cli.to_config()?;
    debug!(
        delimiter = %config.delimiter().as_char(),
        match_mode = ?config.match_mode(),
        strategy = ?config.strategy(),
        "Configuration loaded"
    );
    if let Some(special) = config.special() {
        debug!(%special, "Secondary marker is reserved and has no effect");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Substitutor::new(&config).run_files(&cli.template, &cli.source, &mut out)?;
    Ok(())
}

/// Logs always go to stderr so stdout carries only substitution output.
/// Warnings are shown by default, `RUST_LOG` can change that, and `--verbose`
/// forces debug events with targets.
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    if verbose {
        debug!("Verbose mode enabled");
    }
    Ok(())
}
