//! Settings bound to the workspace they were loaded from.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    FileMatcher,
    MatcherError,
    PomoSettings,
    loader,
};

/// Holds the settings of one workspace root.
///
/// The root is fixed at construction, so the patterns are always matched
/// against the directory whose `.pomo.json` produced them.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Directory containing `.pomo.json`
    workspace_root: PathBuf,
    /// Validated settings in effect
    settings: PomoSettings,
}

impl ConfigManager {
    /// Uses the default settings for `workspace_root` without reading any file.
    #[must_use]
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self { workspace_root: workspace_root.into(), settings: PomoSettings::default() }
    }

    /// Loads `.pomo.json` from `workspace_root`, falling back to defaults when absent.
    ///
    /// # Errors
    /// - The file cannot be read or is not valid JSON
    /// - The settings fail validation
    pub fn load(workspace_root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let workspace_root = workspace_root.into();
        let settings = loader::read_settings(&workspace_root)?;
        Ok(Self { workspace_root, settings })
    }

    /// Replaces the settings after validating them.
    ///
    /// # Errors
    /// The new settings fail validation. The current settings are kept.
    pub fn update_settings(&mut self, settings: PomoSettings) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        self.settings = settings;
        Ok(())
    }

    /// Overrides `compile.numThreads`, e.g. from the command line. `None` keeps the file's value.
    ///
    /// # Errors
    /// `Some(0)` is rejected.
    pub fn override_num_threads(&mut self, num_threads: Option<usize>) -> Result<(), ConfigError> {
        if num_threads.is_none() {
            return Ok(());
        }

        let mut settings = self.settings.clone();
        settings.compile.num_threads = num_threads;
        tracing::debug!(?num_threads, "Overriding compile.numThreads");
        self.update_settings(settings)
    }

    /// Settings in effect.
    #[must_use]
    pub const fn settings(&self) -> &PomoSettings {
        &self.settings
    }

    /// Directory the settings were loaded from.
    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Builds a matcher for this workspace's include and exclude patterns.
    ///
    /// # Errors
    /// A pattern cannot be compiled.
    pub fn file_matcher(&self) -> Result<FileMatcher, MatcherError> {
        FileMatcher::new(self.workspace_root.clone(), &self.settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::CONFIG_FILE_NAME;

    #[rstest]
    fn new_uses_defaults() {
        let manager = ConfigManager::new("/workspace");

        assert_that!(manager.settings().include_patterns, elements_are![eq("**/*.po")]);
        assert_eq!(manager.workspace_root(), Path::new("/workspace"));
    }

    #[rstest]
    fn load_reads_config_file_of_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"excludePatterns": ["vendor/**"]}"#)
            .unwrap();

        let manager = ConfigManager::load(temp_dir.path()).unwrap();

        assert_that!(manager.settings().exclude_patterns, elements_are![eq("vendor/**")]);
        assert_eq!(manager.workspace_root(), temp_dir.path());
    }

    #[rstest]
    fn load_rejects_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"includePatterns": []}"#).unwrap();

        let result = ConfigManager::load(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
    }

    #[rstest]
    #[case(None, Some(2))]
    #[case(Some(5), Some(5))]
    fn override_num_threads_from_cli(#[case] cli_value: Option<usize>, #[case] expected: Option<usize>) {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"compile": {"numThreads": 2}}"#)
            .unwrap();
        let mut manager = ConfigManager::load(temp_dir.path()).unwrap();

        manager.override_num_threads(cli_value).unwrap();

        assert_that!(manager.settings().compile.num_threads, eq(expected));
    }

    #[rstest]
    fn override_with_zero_threads_keeps_settings() {
        let mut manager = ConfigManager::new("/workspace");

        let result = manager.override_num_threads(Some(0));

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_that!(manager.settings().compile.num_threads, none());
    }

    #[rstest]
    fn file_matcher_uses_manager_root() {
        let mut manager = ConfigManager::new("/workspace");
        let settings = PomoSettings {
            exclude_patterns: vec!["vendor/**".to_string()],
            ..PomoSettings::default()
        };
        manager.update_settings(settings).unwrap();

        let matcher = manager.file_matcher().unwrap();

        assert_eq!(matcher.workspace_root(), Path::new("/workspace"));
        assert!(matcher.is_catalog_file(Path::new("/workspace/locale/fr.po")));
        assert!(!matcher.is_catalog_file(Path::new("/workspace/vendor/fr.po")));
        assert!(!matcher.is_catalog_file(Path::new("/elsewhere/fr.po")));
    }
}
