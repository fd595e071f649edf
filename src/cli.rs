//! CLI definitions: argument parsing and help text.

use clap::{ArgAction, Parser};

const AFTER_HELP: &str = "\
Reads data/10.in and writes data/10.pretty.txt, both relative to the current
directory, replacing the pipe characters - | 7 F L J with ─ │ ┐ ┌ └ ┘.

EXAMPLES:
  pipe-prettifier          Render data/10.in
  pipe-prettifier -v       Also log byte counts and timing
  RUST_LOG=debug pipe-prettifier
                           Log per-character substitution counts
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Render ASCII pipe puzzles with Unicode box-drawing characters",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
