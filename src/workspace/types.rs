//! Workspace compilation type definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::MatcherError;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// The workspace root is missing or not a directory
    #[error("Workspace root is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),
    /// Include or exclude patterns could not be compiled
    #[error(transparent)]
    Matcher(#[from] MatcherError),
    /// A catalog failed to compile
    #[error(transparent)]
    Compile(#[from] crate::Error),
    /// A compile task panicked or was cancelled
    #[error("Compile task failed: {0}")]
    TaskFailed(String),
}

/// A catalog written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledCatalog {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// A catalog that could not be compiled.
#[derive(Debug)]
pub struct FailedCatalog {
    pub source: PathBuf,
    pub error: WorkspaceError,
}

/// Outcome of compiling every catalog in a workspace.
///
/// Both lists are ordered by source path.
#[derive(Debug, Default)]
pub struct CompileReport {
    pub compiled: Vec<CompiledCatalog>,
    pub failed: Vec<FailedCatalog>,
}

impl CompileReport {
    /// Returns true when no catalog failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
