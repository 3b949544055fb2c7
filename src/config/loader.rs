//! Reading `.pomo.json` from a workspace root.

use std::io::ErrorKind;
use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    PomoSettings,
};

/// Name of the configuration file looked up at the workspace root.
pub const CONFIG_FILE_NAME: &str = ".pomo.json";

/// Returns where the configuration of `workspace_root` lives.
#[must_use]
pub fn config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(CONFIG_FILE_NAME)
}

/// Reads and validates the settings of `workspace_root`.
///
/// A missing file yields [`PomoSettings::default`]. Keys left out of the file
/// keep their defaults.
pub(super) fn read_settings(workspace_root: &Path) -> Result<PomoSettings, ConfigError> {
    let path = config_path(workspace_root);

    let content = match std::fs::read(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(PomoSettings::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let settings: PomoSettings = match serde_json::from_slice(&content) {
        Ok(settings) => settings,
        Err(source) => return Err(ConfigError::Parse { path, source }),
    };
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    tracing::debug!(path = %path.display(), ?settings, "Loaded configuration");
    Ok(settings)
}
