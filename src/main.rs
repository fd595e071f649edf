//! # Pipe Prettifier
//!
//! Rewrites an ASCII pipe-maze puzzle input (`data/10.in`) with Unicode
//! box-drawing characters and saves it as `data/10.pretty.txt`.

mod cli;
mod core;
mod run;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();
    run::init_logger(&args);

    // Exit uses Display, not Debug, so the message names the failing file
    match run::run() {
        Ok(elapsed) => eprintln!("{}", run::summary(elapsed)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
