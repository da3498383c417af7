//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Remove the dead getTechIcon method and PerformanceMonitor import from
/// the resume service
#[derive(Parser, Debug)]
#[command(name = "resume-cleanup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to patch [default: the plan's target, src/app/resume-service.ts]
    pub path: Option<PathBuf>,

    /// Read the patch plan from a TOML file instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub plan: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
