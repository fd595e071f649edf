//! Fixed input and output locations, relative to the working directory.

use std::path::Path;

/// Puzzle input with ASCII pipe characters.
pub const INPUT: &str = "data/10.in";

/// Rendered output with box-drawing glyphs.
pub const OUTPUT: &str = "data/10.pretty.txt";

pub fn input_path() -> &'static Path {
    Path::new(INPUT)
}

pub fn output_path() -> &'static Path {
    Path::new(OUTPUT)
}
