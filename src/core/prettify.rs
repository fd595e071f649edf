//! ASCII pipe to box-drawing substitution.
//!
//! The mapping is applied pass by pass, in table order, over the whole text.
//! Source and target alphabets are disjoint today, so order does not change the
//! result; an entry whose target is another entry's source would make it matter.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::error::PrettifyError;

/// Ordered `(source, target)` pairs.
pub const MAPPING: &[(char, char)] = &[
    ('-', '─'),
    ('|', '│'),
    ('7', '┐'),
    ('F', '┌'),
    ('L', '└'),
    ('J', '┘'),
];

/// Number of characters replaced by each mapping entry, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionStats {
    pub counts: Vec<(char, usize)>,
}

impl SubstitutionStats {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// Result of a file run, for logging and the summary line.
#[derive(Debug, Clone)]
pub struct Report {
    pub chars: usize,
    pub bytes_in: usize,
    pub bytes_out: usize,
    pub stats: SubstitutionStats,
}

/// Replace every mapped ASCII pipe character with its box-drawing glyph.
pub fn prettify(text: &str) -> String {
    prettify_with_stats(text).0
}

/// Like [`prettify`], also counting replacements per mapping entry.
pub fn prettify_with_stats(text: &str) -> (String, SubstitutionStats) {
    let mut out = text.to_string();
    let mut counts = Vec::with_capacity(MAPPING.len());
    for &(from, to) in MAPPING {
        let n = out.matches(from).count();
        if n > 0 {
            out = out.replace(from, &to.to_string());
        }
        log::debug!("{:?} -> {:?}: {} replaced", from, to, n);
        counts.push((from, n));
    }
    (out, SubstitutionStats { counts })
}

/// Read `input`, prettify it, write the result to `output`.
///
/// The output is only opened after the input has been read, so a failed read
/// leaves any existing output untouched.
pub fn prettify_file(input: &Path, output: &Path) -> Result<Report, PrettifyError> {
    let text = fs::read_to_string(input).map_err(|e| PrettifyError::read(input, e))?;
    log::info!("Read {} bytes from {}", text.len(), input.display());

    let (pretty, stats) = prettify_with_stats(&text);

    let file = File::create(output).map_err(|e| PrettifyError::write(output, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(pretty.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| PrettifyError::write(output, e))?;
    log::info!(
        "Wrote {} bytes to {} ({} substitutions)",
        pretty.len(),
        output.display(),
        stats.total()
    );

    Ok(Report {
        chars: text.chars().count(),
        bytes_in: text.len(),
        bytes_out: pretty.len(),
        stats,
    })
}
