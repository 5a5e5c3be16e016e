//! CLI option parsing with clap for dupdigest.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print content digests for duplicate detection")]
pub struct Opts {
    /// Files to digest (directories are reported as unsupported, not walked)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Hash the full content of every file with BLAKE3 instead of sampling
    #[arg(long, short = 't')]
    pub thorough: bool,

    /// Output machine-readable JSON instead of human text
    #[arg(long)]
    pub json: bool,

    /// Quiet human output: print only the final summary
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Opts {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
