//! Error types for textfix-engine.
//!
//! Both variants are per-file failures. The batch driver catches them at
//! file granularity and converts them into `failed` outcome records; they
//! never abort a batch.

use camino::Utf8PathBuf;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixError {
    /// The path is missing, not readable, or its bytes are not valid UTF-8.
    #[error("read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path is not writable at write time (permissions, lock, disk full).
    /// A failed write may leave a truncated file behind; no rollback is
    /// attempted.
    #[error("write {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FixError {
    /// The path the failure is about.
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            FixError::Read { path, .. } | FixError::Write { path, .. } => path,
        }
    }
}

/// Result type alias using FixError.
pub type FixResult<T> = Result<T, FixError>;
