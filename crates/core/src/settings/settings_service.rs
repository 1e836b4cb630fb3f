use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::constants::SETTINGS_FILE_NAME;
use crate::errors::{Error, Result};
use crate::settings::Settings;

/// Loads and persists [`Settings`] as a JSON file.
///
/// A missing file yields the built-in defaults; a file that exists but does
/// not parse is a configuration error rather than a silent fallback.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Service over the default settings file inside a data directory.
    pub fn in_directory(directory: impl AsRef<Path>) -> Self {
        Self::new(directory.as_ref().join(SETTINGS_FILE_NAME))
    }

    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            warn!(
                "Settings file {} not found, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", self.path.display(), e)))?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| Error::InvalidConfigValue(format!("{}: {}", self.path.display(), e)))?;

        debug!(
            "Loaded settings with {} accounts from {}",
            settings.accounts.len(),
            self.path.display()
        );
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}
