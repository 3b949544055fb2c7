//! Batch compilation of a directory tree.
mod compiler;
mod types;

pub use compiler::WorkspaceCompiler;
pub use types::{
    CompileReport,
    CompiledCatalog,
    FailedCatalog,
    WorkspaceError,
};
