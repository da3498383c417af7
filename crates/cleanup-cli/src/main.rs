//! resume-cleanup
//!
//! One-shot removal of the dead `getTechIcon` method and the unused
//! `PerformanceMonitor` import from the resume service source.

mod cli;
mod error;
mod output;
mod patch;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the status lines
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("{}: {}", "warning".yellow().bold(), e);
        }
        tracing::debug!("Verbose mode enabled");
    }

    let cwd = std::env::current_dir()?;
    patch::run_patch(&cwd, cli.path.as_deref(), cli.plan.as_deref())
}
