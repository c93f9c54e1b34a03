//! Error types for tlref-gen.

use std::path::{Path, PathBuf};
use std::{fmt, io};

/// Failures reading or writing the files around the model.
///
/// Parsing and modeling never fail; only file access and JSON decoding do.
#[derive(Debug)]
pub enum Error {
    /// A file could not be read or written.
    Io {
        /// The file in question.
        path: PathBuf,
        /// The underlying failure.
        source: io::Error,
    },
    /// A JSON document could not be encoded or decoded.
    Json {
        /// The file in question.
        path: PathBuf,
        /// The underlying failure.
        source: serde_json::Error,
    },
}

impl Error {
    /// An I/O failure on `path`.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io { path: path.to_owned(), source }
    }

    /// A JSON failure on `path`.
    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json { path: path.to_owned(), source }
    }

    /// The file this error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } => path,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source }   => write!(f, "{}: {source}", path.display()),
            Self::Json { path, source } => write!(f, "{}: invalid JSON: {source}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}
