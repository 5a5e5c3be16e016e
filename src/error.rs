//! Error types for digest computation.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for digest operations
pub type Result<T> = std::result::Result<T, DigestError>;

/// Which read produced a [`DigestError::Read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPhase {
    Full,
    Head,
    Middle,
    Tail,
}

impl fmt::Display for ReadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReadPhase::Full => "full content",
            ReadPhase::Head => "head",
            ReadPhase::Middle => "middle",
            ReadPhase::Tail => "tail",
        };
        f.write_str(s)
    }
}

/// Failure inside a [`crate::hashing::ContentHasher`].
#[derive(Debug, Error)]
#[error("{algorithm} failed: {message}")]
pub struct HashError {
    pub algorithm: &'static str,
    pub message: String,
}

/// Errors that can occur while digesting one file
#[derive(Debug, Error)]
pub enum DigestError {
    /// stat failed (missing path, permissions, ...)
    #[error("couldn't stat {}: {source}", .path.display())]
    Metadata { path: PathBuf, source: io::Error },

    /// Path is a directory, symlink or special file
    #[error("can't compute hash of non-regular file {} ({kind})", .path.display())]
    UnsupportedFileType { path: PathBuf, kind: &'static str },

    /// File could not be opened for reading
    #[error("couldn't open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    /// A full or windowed read came up short or failed
    #[error("couldn't read {phase} of {} (maybe file is corrupted?): {source}", .path.display())]
    Read {
        path: PathBuf,
        phase: ReadPhase,
        source: io::Error,
    },

    /// The hasher itself failed
    #[error(transparent)]
    Hash(#[from] HashError),
}
