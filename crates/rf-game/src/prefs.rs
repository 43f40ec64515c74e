//! Saved player preferences.
//!
//! Preferences are stored as a small JSON file. A missing or unreadable file
//! never blocks play: loading falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rf_narrative::Mode;

use crate::error::{GameError, GameResult};

/// Player preferences remembered between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Narrative mode.
    pub mode: Mode,
    /// Whether sound cues are muted.
    pub muted: bool,
    /// Whether high-contrast output is requested.
    pub high_contrast: bool,
    /// Whether pauses and animations are skipped.
    pub reduced_motion: bool,
}

impl Preferences {
    /// Load preferences from `path`, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no preferences at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("cannot read {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("ignoring corrupt preferences {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write preferences to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> GameResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| GameError::Prefs(format!("{}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GameError::Prefs(e.to_string()))?;
        fs::write(path, json).map_err(|e| GameError::Prefs(format!("{}: {e}", path.display())))?;
        log::info!("saved preferences to {}", path.display());
        Ok(())
    }

    /// Flip the mute toggle, returning the new value.
    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Flip the high-contrast toggle, returning the new value.
    pub fn toggle_contrast(&mut self) -> bool {
        self.high_contrast = !self.high_contrast;
        self.high_contrast
    }

    /// Flip the reduced-motion toggle, returning the new value.
    pub fn toggle_reduced_motion(&mut self) -> bool {
        self.reduced_motion = !self.reduced_motion;
        self.reduced_motion
    }
}
