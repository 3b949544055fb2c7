//! Batch compilation of every catalog in a workspace.

use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;

use ignore::WalkBuilder;
use tokio::sync::Semaphore;

use crate::config::{
    ConfigManager,
    FileMatcher,
};
use crate::mo::{
    Compiler,
    default_output_path,
};
use crate::workspace::types::{
    CompileReport,
    CompiledCatalog,
    FailedCatalog,
    WorkspaceError,
};

/// Compiles all `.po` files selected by the workspace settings.
#[derive(Clone, Debug, Default)]
pub struct WorkspaceCompiler {
    /// Single-file compiler shared by all tasks
    compiler: Compiler,
}

impl WorkspaceCompiler {
    /// Creates a workspace compiler using the default [`Compiler`].
    #[must_use]
    pub const fn new() -> Self {
        Self { compiler: Compiler::new() }
    }

    /// Compiles every matching catalog under the manager's workspace root next to its source.
    ///
    /// Catalogs are compiled on blocking threads, at most
    /// `compile.numThreads` at a time. A failing catalog is recorded in the
    /// report and does not stop the others.
    ///
    /// # Errors
    /// - The root is not a directory
    /// - The configured patterns are invalid
    pub async fn compile_workspace(
        &self,
        config_manager: &ConfigManager,
    ) -> Result<CompileReport, WorkspaceError> {
        let workspace_root = config_manager.workspace_root();
        if !workspace_root.is_dir() {
            return Err(WorkspaceError::InvalidRoot(workspace_root.to_path_buf()));
        }

        tracing::debug!(workspace_root = %workspace_root.display(), "Compiling workspace");
        let matcher = config_manager.file_matcher()?;
        let files = Self::find_catalog_files(&matcher);
        tracing::debug!(count = files.len(), "Found catalogs");

        let permits =
            Arc::new(Semaphore::new(config_manager.settings().compile.effective_num_threads()));
        let futures: Vec<_> = files
            .into_iter()
            .map(|file| self.compile_file(workspace_root, file, Arc::clone(&permits)))
            .collect();

        let mut report = CompileReport::default();
        for (source, result) in futures::future::join_all(futures).await {
            match result {
                Ok(destination) => report.compiled.push(CompiledCatalog { source, destination }),
                Err(error) => {
                    tracing::warn!("Failed to compile {:?}: {}", source, error);
                    report.failed.push(FailedCatalog { source, error });
                }
            }
        }

        Ok(report)
    }

    /// Compiles one catalog once a permit is available.
    async fn compile_file(
        &self,
        workspace_root: &Path,
        source: PathBuf,
        permits: Arc<Semaphore>,
    ) -> (PathBuf, Result<PathBuf, WorkspaceError>) {
        let _permit = match permits.acquire_owned().await {
            Ok(permit) => permit,
            Err(e) => return (source, Err(WorkspaceError::TaskFailed(e.to_string()))),
        };

        let compiler = self.compiler.clone();
        let task_source = source.clone();
        let destination = destination_for(workspace_root, &source);
        let result = tokio::task::spawn_blocking(move || {
            compiler.compile(&task_source, Some(&destination))
        })
            .await
            .map_err(|e| WorkspaceError::TaskFailed(e.to_string()))
            .and_then(|result| result.map_err(WorkspaceError::from));

        (source, result)
    }

    /// Walks the workspace and returns matching catalogs in path order.
    fn find_catalog_files(matcher: &FileMatcher) -> Vec<PathBuf> {
        let mut found_files = Vec::new();

        for result in WalkBuilder::new(matcher.workspace_root())
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            if matcher.is_catalog_file(entry.path()) {
                found_files.push(entry.into_path());
            }
        }

        found_files.sort();
        found_files
    }
}

/// Derives the output path of a walked catalog.
///
/// The `.po` to `.mo` rename only looks at the part below `workspace_root`, so
/// a root such as `app.portal/` is left intact.
fn destination_for(workspace_root: &Path, source: &Path) -> PathBuf {
    source.strip_prefix(workspace_root).map_or_else(
        |_| default_output_path(source),
        |relative| workspace_root.join(default_output_path(relative)),
    )
}
