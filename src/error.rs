//! Errors raised while parsing and compiling catalogs.

use std::path::PathBuf;

use thiserror::Error;

/// Defines errors that may occur while turning a `.po` file into a `.mo` file
#[derive(Error, Debug)]
pub enum Error {
    /// The source catalog does not exist
    #[error("No .po file at '{}'", .path.display())]
    InvalidInput {
        /// Path that was asked for
        path: PathBuf,
    },
    /// Reading the source or writing the destination failed
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// A length or offset does not fit into a 32-bit MO word
    #[error("{what} of {len} bytes does not fit into a 32-bit MO word")]
    TooLarge {
        /// Which quantity overflowed
        what: &'static str,
        /// The offending value
        len: usize,
    },
}

impl Error {
    /// Wraps an I/O error with the path it happened on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
