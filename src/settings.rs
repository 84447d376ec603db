use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::password::GeneratorOptions;

/// Allowed range for the copy-icon reset delay, in milliseconds
pub const MIN_COPY_RESET_MILLIS: u64 = 500;
pub const MAX_COPY_RESET_MILLIS: u64 = 10_000;
pub const DEFAULT_COPY_RESET_MILLIS: u64 = 2_000;

/// Returns the base data directory for QuickGen files.
pub fn data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "KANFER", "QuickGen") {
        let dir = proj_dirs.data_dir();
        let _ = fs::create_dir_all(dir);
        dir.to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

/// User defaults for the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Options the generator starts with
    pub generator: GeneratorOptions,
    /// How long the check icon stays after a copy (500-10000 ms, default 2000)
    pub copy_reset_millis: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            generator: GeneratorOptions::default(),
            copy_reset_millis: DEFAULT_COPY_RESET_MILLIS,
        }
    }
}

impl AppSettings {
    /// Returns the path to the settings file
    pub fn settings_path() -> PathBuf {
        data_dir().join("settings.json")
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        Self::load_from(&Self::settings_path())
    }

    /// Load settings from `path`, or return defaults if missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Ignoring unreadable settings file");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let mut settings: AppSettings = serde_json::from_str(&data)?;
        settings.generator = settings.generator.normalized();
        settings.set_copy_reset_millis(settings.copy_reset_millis);
        Ok(settings)
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        tracing::info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Validate and clamp the copy reset delay to allowed range
    pub fn set_copy_reset_millis(&mut self, millis: u64) {
        self.copy_reset_millis = millis.clamp(MIN_COPY_RESET_MILLIS, MAX_COPY_RESET_MILLIS);
    }

    pub fn copy_reset_delay(&self) -> Duration {
        Duration::from_millis(self.copy_reset_millis)
    }
}
