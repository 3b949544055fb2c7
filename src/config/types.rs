//! Settings read from `.pomo.json`.

use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Failures while reading `.pomo.json` or applying settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        /// Configuration file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{}': {source}", .path.display())]
    Parse {
        /// Configuration file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

/// Renders validation errors as a numbered list.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Contents of `.pomo.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PomoSettings {
    /// Catalogs to compile, relative to the workspace root.
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,

    pub compile: CompileConfig,
}

impl Default for PomoSettings {
    fn default() -> Self {
        Self {
            include_patterns: vec!["**/*.po".to_string()],
            exclude_patterns: Vec::new(),
            compile: CompileConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileConfig {
    /// Number of catalogs compiled in parallel.
    /// Default: 80% of CPU cores (minimum 1).
    pub num_threads: Option<usize>,
}

impl CompileConfig {
    /// Resolves `num_threads`, falling back to 80% of the available cores.
    #[must_use]
    pub fn effective_num_threads(&self) -> usize {
        self.num_threads.unwrap_or_else(|| (num_cpus::get() * 4 / 5).max(1))
    }
}

impl PomoSettings {
    /// # Errors
    /// - No include pattern
    /// - Invalid glob pattern
    /// - Zero worker threads
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "includePatterns",
                "At least one pattern is required. Example: [\"**/*.po\"]",
            ));
        }

        for (index, pattern) in self.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if self.compile.num_threads == Some(0) {
            errors.push(ValidationError::new(
                "compile.numThreads",
                "At least one thread is required. Remove this field to use the default",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = PomoSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: PomoSettings = serde_json::from_str("{}").unwrap();

        assert_that!(settings.include_patterns, elements_are![eq("**/*.po")]);
        assert_that!(settings.exclude_patterns, is_empty());
        assert_that!(settings.compile.num_threads, none());
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"excludePatterns": ["vendor/**"], "compile": {"numThreads": 2}}"#;

        let settings: PomoSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.include_patterns, elements_are![eq("**/*.po")]);
        assert_that!(settings.exclude_patterns, elements_are![eq("vendor/**")]);
        assert_that!(settings.compile.num_threads, some(eq(2_usize)));
        assert_that!(settings.compile.effective_num_threads(), eq(2_usize));
    }

    #[rstest]
    fn effective_num_threads_defaults_to_at_least_one() {
        assert_that!(CompileConfig::default().effective_num_threads(), ge(1_usize));
    }

    #[rstest]
    fn validate_empty_include_patterns() {
        let settings = PomoSettings { include_patterns: Vec::new(), ..PomoSettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("includePatterns")),
                field!(ValidationError.message, contains_substring("At least one pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_glob_patterns() {
        let settings = PomoSettings {
            include_patterns: vec!["**/*.po".to_string(), "**/*.{po".to_string()],
            exclude_patterns: vec!["[invalid".to_string()],
            ..PomoSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![
                field!(ValidationError.field_path, eq("includePatterns[1]")),
                field!(ValidationError.field_path, eq("excludePatterns[0]"))
            ])
        );
    }

    #[rstest]
    fn validate_zero_threads() {
        let settings = PomoSettings {
            compile: CompileConfig { num_threads: Some(0) },
            ..PomoSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("compile.numThreads"))])
        );
    }

    #[rstest]
    fn validation_errors_are_numbered() {
        let error = ConfigError::ValidationErrors(vec![
            ValidationError::new("a", "first"),
            ValidationError::new("b", "second"),
        ]);

        assert_that!(
            error.to_string(),
            eq("Configuration validation failed:\n  1. a - first\n  2. b - second")
        );
    }
}
