//! Configuration module for the Tea Break Notes reader
//!
//! Handles persistent application state: the preferred UI language and
//! appearance preferences.
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/io.github.chennima.teabreak-notes/`
//! - **macOS**: `~/Library/Application Support/io.github.chennima.teabreak-notes/`
//! - **Windows**: `%APPDATA%\io.github.chennima.teabreak-notes\`
//!
//! # Failure semantics
//!
//! Persistence is best-effort in both directions. A missing, unreadable or
//! unparsable state file loads as defaults; a failed save is logged and
//! swallowed. The worst outcome is a preference that does not survive a
//! restart — never an error surfaced to the UI.

use crate::error::{NotesError, Result};
use crate::i18n::PreferenceSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "io.github.chennima.teabreak-notes";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        NotesError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            NotesError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

/// Persistent application state
///
/// Stores user preferences that persist across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

fn default_app_state_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            ui_preferences: UiPreferences::default(),
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            NotesError::Config("Could not determine app state path".to_string())
        })?;
        Self::load_from(&path)
    }

    /// Load app state from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| NotesError::Config(format!("Failed to read app state: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| NotesError::Config(format!("Failed to parse app state: {}", e)))
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(&dir.join(APP_STATE_FILE))
    }

    /// Save app state to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| NotesError::Config(format!("Failed to serialize app state: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| NotesError::Config(format!("Failed to write app state: {}", e)))
    }
}

impl PreferenceSource for AppState {
    fn preferred_locale(&self) -> Option<String> {
        self.ui_preferences.preferred_locale.clone()
    }
}

/// UI preferences that persist across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Preferred UI language, stored as its plain tag (`"en"` / `"zh"`).
    /// Unknown tags are treated as "no preference" at resolution time.
    #[serde(default)]
    pub preferred_locale: Option<String>,

    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Font scale factor
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
}

fn default_true() -> bool {
    true
}

fn default_font_scale() -> f32 {
    1.0
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            preferred_locale: None,
            dark_mode: true,
            font_scale: 1.0,
        }
    }
}
