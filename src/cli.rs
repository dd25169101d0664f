//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Resolves human-readable variable names for React hook observations
#[derive(Parser, Debug)]
#[command(name = "hookres")]
#[command(about = "Resolves human-readable variable names for React hook observations via source maps")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Path to a JSON file containing a hook observation tree (array of
    /// `HookObservation`). Reads from stdin when omitted.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Pretty-print the resulting JSON.
    #[arg(short, long)]
    pub pretty: bool,

    /// Translated lines past this bound fail position translation.
    #[arg(long, default_value_t = crate::position::MAX_SAFE_LINE)]
    pub max_safe_line: u32,

    /// HTTP request timeout, in seconds, for bundle and source-map fetches.
    #[arg(long, default_value_t = 10)]
    pub fetch_timeout_secs: u64,

    /// Upper bound on concurrently in-flight fetches.
    #[arg(long, default_value_t = 8)]
    pub max_concurrent_fetches: usize,

    /// Log level (error, warn, info, debug, trace). Overridden by RUST_LOG.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Parse CLI arguments from the command line.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> crate::config::Config {
        crate::config::Config {
            max_safe_line: self.max_safe_line,
            fetch_timeout_secs: self.fetch_timeout_secs,
            max_concurrent_fetches: self.max_concurrent_fetches,
        }
    }
}
