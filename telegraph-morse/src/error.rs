use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while transliterating files.
#[derive(Debug, Error)]
pub enum MorseError {
    #[error("Failed to read input {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MorseError {
    /// The underlying I/O error kind.
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            MorseError::Read { source, .. } | MorseError::Write { source, .. } => source.kind(),
        }
    }
}
