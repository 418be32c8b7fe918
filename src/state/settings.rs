use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Which home page to show.
///
/// `Animated` fades the hero on scroll and plays entrance animations;
/// `Static` shows everything immediately.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HomeVariant {
    #[default]
    Animated,
    Static,
}

impl HomeVariant {
    pub fn is_animated(self) -> bool {
        self == HomeVariant::Animated
    }
}

/// Initial window size in logical pixels
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// User settings, stored as JSON.
///
/// Every field has a default so a partial or empty file is still valid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub variant: HomeVariant,
    /// Directory that web-style asset paths ("/photo.jpg") resolve against
    pub assets_dir: Option<PathBuf>,
    pub window: WindowSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not determine the user config directory")]
    NoConfigDir,
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Settings {
    /// Load settings from the default location.
    ///
    /// Never fails: a broken file gives defaults with a warning.
    pub fn load() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_or_init(&path),
            Err(err) => {
                warn!("⚠️  {}, using default settings", err);
                Self::default()
            }
        }
    }

    /// Load settings from `path`, writing the defaults there on first run
    /// so the file can be edited by hand.
    pub fn load_or_init(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            match settings.save_to(path) {
                Ok(()) => info!("⚙️  Wrote default settings to {}", path.display()),
                Err(err) => warn!("⚠️  Could not write {}: {}", path.display(), err),
            }
            return settings;
        }

        match Self::load_from(path) {
            Ok(settings) => {
                info!("⚙️  Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                warn!("⚠️  Ignoring {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Path of the settings file:
    /// - Linux: ~/.config/homefinder/settings.json
    /// - macOS: ~/Library/Application Support/homefinder/settings.json
    /// - Windows: %APPDATA%\homefinder\settings.json
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let mut path = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        path.push("homefinder");
        path.push("settings.json");
        Ok(path)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Resolve a web-style asset reference to a file on disk.
    /// Returns `None` when no asset directory is configured.
    pub fn resolve_asset(&self, reference: &str) -> Option<PathBuf> {
        let dir = self.assets_dir.as_ref()?;
        Some(dir.join(reference.trim_start_matches('/')))
    }
}
