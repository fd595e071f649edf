//! Application run: logger init and the prettify pass over the fixed paths.

use std::time::{Duration, Instant};

use crate::cli::Args;
use crate::core;
use crate::core::error::PrettifyError;

/// Initialize env_logger from the -v/-q flags; `RUST_LOG` takes precedence.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Prettify `data/10.in` into `data/10.pretty.txt`. Returns the elapsed time.
pub fn run() -> Result<Duration, PrettifyError> {
    let start = Instant::now();
    let input = core::paths::input_path();
    let output = core::paths::output_path();
    log::info!(
        "{} {}: {} -> {}",
        core::app::NAME,
        core::app::VERSION,
        input.display(),
        output.display()
    );

    let report = core::prettify::prettify_file(input, output)?;
    let elapsed = start.elapsed();
    log::info!(
        "{} chars ({} -> {} bytes), {} substitutions, finished in {:?}",
        report.chars,
        report.bytes_in,
        report.bytes_out,
        report.stats.total(),
        elapsed
    );
    Ok(elapsed)
}

/// One-line summary printed to stderr after a successful run.
pub fn summary(elapsed: Duration) -> String {
    format!("Wrote {} in {:?}", core::paths::OUTPUT, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_names_output_and_time() {
        let line = summary(Duration::from_millis(3));
        assert_eq!(line, "Wrote data/10.pretty.txt in 3ms");
    }
}
