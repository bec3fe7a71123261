//! Command-line argument definitions for the Tracklane CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input and output, the configuration
//! file, per-run layout overrides, and logging verbosity.

use clap::Parser;

use tracklane::strategy::LayoutStrategy;

/// Command-line arguments for the Tracklane layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input intervals file (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; rows are printed to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Layout strategy (sweep, greedy, heuristic)
    #[arg(short, long)]
    pub strategy: Option<LayoutStrategy>,

    /// Padding added around every interval before testing overlap
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Number of heuristic trials
    #[arg(long)]
    pub trials: Option<usize>,

    /// Seed for the heuristic strategy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
