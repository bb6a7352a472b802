use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::TimelineSettings;

const SETTINGS_FILE: &str = "settings.toml";

/// Reads and writes [`TimelineSettings`] as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the per-user config directory.
    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// `<config dir>/settings.toml`, or `./settings.toml` if no home directory is known.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "BookingsTimeline", "BookingsTimeline") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate settings. A missing file is an error.
    pub fn load(&self) -> Result<TimelineSettings> {
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings = Self::parse(&data)
            .with_context(|| format!("invalid settings in {}", self.path.display()))?;
        log::info!("Loaded timeline settings from {}", self.path.display());
        Ok(settings)
    }

    /// Load settings, or defaults if the file is missing or unusable.
    pub fn load_or_default(&self) -> TimelineSettings {
        if !self.path.exists() {
            return TimelineSettings::default();
        }
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{:#}; using default settings", err);
                TimelineSettings::default()
            }
        }
    }

    /// Parse and validate settings from TOML text.
    pub fn parse(data: &str) -> Result<TimelineSettings> {
        let settings: TimelineSettings =
            toml::from_str(data).context("failed to parse settings TOML")?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }

    pub fn save(&self, settings: &TimelineSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}
