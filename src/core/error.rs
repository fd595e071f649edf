//! Errors from reading the puzzle input and writing the rendered output.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PrettifyError {
    #[error("failed to read input {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PrettifyError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PrettifyError::ReadInput {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PrettifyError::WriteOutput {
            path: path.into(),
            source,
        }
    }
}
