//! Arcade settings
//!
//! Stored as JSON. Missing fields fall back to their defaults so older files
//! keep loading.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, TICK_RATE_HZ};
use crate::highscores::MAX_HIGH_SCORES;
use crate::sim::GameKind;

/// Accepted tick rates; constants are tuned for 60 Hz
const MIN_TICK_RATE_HZ: u32 = 10;
const MAX_TICK_RATE_HZ: u32 = 240;

/// Failure reading or writing a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings I/O error: {}", e),
            SettingsError::Json(e) => write!(f, "invalid settings JSON: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

/// Host and session preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub tick_rate_hz: u32,
    /// Most ticks run for a single host frame
    pub max_substeps: u32,
    /// Fixed RNG seed; `None` lets the host pick one
    pub seed: Option<u64>,
    /// Game started when none is requested
    pub default_game: GameKind,
    /// Scores kept per game
    pub leaderboard_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            max_substeps: MAX_SUBSTEPS,
            seed: None,
            default_game: GameKind::default(),
            leaderboard_size: MAX_HIGH_SCORES,
        }
    }
}

impl Settings {
    /// Seconds per tick, from the clamped tick rate
    pub fn timestep(&self) -> f32 {
        1.0 / self.tick_rate_hz.clamp(MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ) as f32
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load `path`, or fall back to defaults when it is missing or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path.display());
                Self::default()
            }
        }
    }
}
