//=========================================================================
// Settings Store
//=========================================================================
//
// Key-value configuration persistence for the game.
//
// Holds string-valued settings (highscore ladder, player name default,
// audio volumes/toggles) in memory and writes them to a JSON file on an
// explicit save(). Loading is total: a missing or unreadable file yields
// an empty store, logged but never fatal.
//
// Backing file: <config_dir>/apocrypt/settings.json
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

//=== Settings Keys =======================================================

/// Key holding the serialized highscore ladder.
pub const KEY_HIGHSCORES: &str = "highscores";

/// Key holding the default player name used for score submission.
pub const KEY_PLAYER_NAME: &str = "player_name";

/// Key holding the music category volume (0.0..=1.0).
pub const KEY_MUSIC_VOLUME: &str = "music_volume";

/// Key holding the effects category volume (0.0..=1.0).
pub const KEY_EFFECTS_VOLUME: &str = "effects_volume";

/// Key holding the global audio enable toggle.
pub const KEY_AUDIO_ENABLED: &str = "audio_enabled";

const DEFAULT_PLAYER_NAME: &str = "Player";
const DEFAULT_VOLUME: f32 = 0.8;

//=== SettingsError =======================================================

/// Errors raised by settings persistence.
#[derive(Debug)]
pub enum SettingsError {
    /// File could not be read or written.
    Io(std::io::Error),

    /// File contents were not valid JSON.
    Serialization(serde_json::Error),

    /// Store has no backing file (in-memory mode).
    NoBackingFile,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Settings I/O error: {}", e),
            Self::Serialization(e) => write!(f, "Settings serialization error: {}", e),
            Self::NoBackingFile => write!(f, "Settings store has no backing file"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

//=== SettingsFile ========================================================

/// On-disk representation of the settings store.
#[derive(Debug, Serialize, Deserialize)]
struct SettingsFile {
    values: HashMap<String, String>,
}

//=== SettingsStore =======================================================

/// String-keyed settings store with explicit save semantics.
///
/// Mutations touch only the in-memory map; nothing reaches disk until
/// [`save`](Self::save) is called. Consumers on the frame path treat a
/// failed save as log-and-continue, never as a fatal condition.
pub struct SettingsStore {
    path: Option<PathBuf>,
    values: HashMap<String, String>,
}

impl SettingsStore {
    //--- Construction -----------------------------------------------------

    /// Opens a store backed by the given file, loading existing values.
    ///
    /// A missing file starts empty; an unreadable or malformed file is
    /// logged and also starts empty (the next save overwrites it).
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match Self::load_file(&path) {
            Ok(values) => values,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}, starting empty", path.display());
                HashMap::new()
            }
            Err(e) => {
                warn!("Failed to load settings from {}: {}", path.display(), e);
                HashMap::new()
            }
        };

        Self { path: Some(path), values }
    }

    /// Opens a store at the platform default location.
    ///
    /// Falls back to in-memory mode when no config directory is available
    /// (settings then last for the process lifetime only).
    pub fn open_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::open(path),
            None => {
                warn!("No config directory available, settings will not persist");
                Self::in_memory()
            }
        }
    }

    /// Creates a store with no backing file.
    ///
    /// Used by tests and headless runs; save() returns `NoBackingFile`.
    pub fn in_memory() -> Self {
        Self { path: None, values: HashMap::new() }
    }

    /// Returns the platform default settings path, if one exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("apocrypt").join("settings.json"))
    }

    //--- Raw Access -------------------------------------------------------

    /// Returns the string value for a key, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Sets the string value for a key (in memory only).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes a key, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    //--- Typed Accessors --------------------------------------------------

    /// Returns the default player name for score submission.
    pub fn player_name(&self) -> &str {
        self.get(KEY_PLAYER_NAME).unwrap_or(DEFAULT_PLAYER_NAME)
    }

    /// Sets the default player name.
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.set(KEY_PLAYER_NAME, name.into());
    }

    /// Returns the music category volume, clamped to 0.0..=1.0.
    pub fn music_volume(&self) -> f32 {
        self.volume_for(KEY_MUSIC_VOLUME)
    }

    /// Returns the effects category volume, clamped to 0.0..=1.0.
    pub fn effects_volume(&self) -> f32 {
        self.volume_for(KEY_EFFECTS_VOLUME)
    }

    /// Returns whether audio is enabled (defaults to true).
    pub fn audio_enabled(&self) -> bool {
        self.get(KEY_AUDIO_ENABLED)
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true)
    }

    fn volume_for(&self, key: &str) -> f32 {
        self.get(key)
            .and_then(|v| v.parse::<f32>().ok())
            .unwrap_or(DEFAULT_VOLUME)
            .clamp(0.0, 1.0)
    }

    //--- Persistence ------------------------------------------------------

    /// Writes the store to its backing file.
    ///
    /// Creates the parent directory on first save.
    pub fn save(&self) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Err(SettingsError::NoBackingFile);
        };

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = SettingsFile { values: self.values.clone() };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(path, json)?;

        debug!("Settings saved to {}", path.display());
        Ok(())
    }

    fn load_file(path: &Path) -> Result<HashMap<String, String>, SettingsError> {
        let json = fs::read_to_string(path)?;
        let file: SettingsFile = serde_json::from_str(&json)?;
        Ok(file.values)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
