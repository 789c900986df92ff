//! Error types shared across the crate.

use std::path::PathBuf;

/// Errors produced while configuring, loading, building, or writing a benchmark run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A table size of zero was requested.
    #[error("invalid modulus {modulus}: table size must be positive")]
    InvalidModulus { modulus: u64 },

    /// The polynomial base must be at least 2.
    #[error("invalid hash base {base}: must be > 1")]
    InvalidBase { base: u64 },

    #[error("no moduli supplied")]
    EmptyModuli,

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("malformed query on line {line}: {reason}")]
    MalformedQuery { line: usize, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
