//! Engine configuration and player preferences
//!
//! `EngineConfig` carries the tunable gameplay constants the simulation reads
//! every tick. `Settings` wraps it with the collaborator preferences and is
//! persisted as JSON: a file on native builds, LocalStorage on wasm32.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;
use crate::sim::TieBreak;

/// Environment override for the RNG seed
pub const ENV_SEED: &str = "MAZE_CHASE_SEED";
/// Environment override for the tick cadence in milliseconds
pub const ENV_TICK_MS: &str = "MAZE_CHASE_TICK_MS";

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("settings are not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("{name}={value:?} is not a valid value")]
    InvalidEnv { name: &'static str, value: String },
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Gameplay constants read by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed tick cadence
    pub tick_ms: u64,
    /// Frightened duration after a power item, in ticks
    pub frightened_ticks: u32,
    pub dot_points: u64,
    pub power_item_points: u64,
    pub capture_points: u64,
    pub starting_lives: u8,
    /// Greedy adversary tie-break
    pub tie_break: TieBreak,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_ms: consts::TICK_MS,
            frightened_ticks: consts::FRIGHTENED_TICKS,
            dot_points: consts::DOT_POINTS,
            power_item_points: consts::POWER_ITEM_POINTS,
            capture_points: consts::CAPTURE_POINTS,
            starting_lives: consts::STARTING_LIVES,
            tie_break: TieBreak::KeepHeading,
        }
    }
}

impl EngineConfig {
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_ms == 0 {
            return Err(SettingsError::Zero { field: "tick_ms" });
        }
        if self.starting_lives == 0 {
            return Err(SettingsError::Zero {
                field: "starting_lives",
            });
        }
        Ok(())
    }
}

/// Persisted preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gameplay constants
    pub engine: EngineConfig,

    // === Collaborators ===
    /// Sound cues are queued only when enabled
    pub sound_enabled: bool,
    /// Fixed RNG seed; a fresh one is drawn when unset
    pub seed: Option<u64>,
    /// High score file (native only)
    pub high_score_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            sound_enabled: true,
            seed: None,
            high_score_path: "maze_chase_scores.json".to_string(),
        }
    }
}

impl Settings {
    /// Settings file read by `load` on native builds
    pub const FILE_NAME: &'static str = "maze_chase_settings.json";

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "maze_chase_settings";

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.engine.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply `MAZE_CHASE_SEED` / `MAZE_CHASE_TICK_MS` from the process environment
    pub fn apply_env(&mut self) -> Result<(), SettingsError> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable lookup
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<(), SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_SEED) {
            let seed = value.trim().parse().map_err(|_| SettingsError::InvalidEnv {
                name: ENV_SEED,
                value: value.clone(),
            })?;
            self.seed = Some(seed);
        }
        if let Some(value) = lookup(ENV_TICK_MS) {
            let tick_ms = value.trim().parse().map_err(|_| SettingsError::InvalidEnv {
                name: ENV_TICK_MS,
                value: value.clone(),
            })?;
            self.engine.tick_ms = tick_ms;
        }
        self.engine.validate()
    }

    /// Load settings from a JSON file; a missing file yields defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &str) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path);
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path);
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &str) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?).map_err(|source| SettingsError::Io {
            path: path.to_string(),
            source,
        })?;
        log::info!("Settings saved to {}", path);
        Ok(())
    }

    /// Load settings from the default file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(Self::FILE_NAME).unwrap_or_else(|e| {
            log::warn!("Ignoring settings file: {}", e);
            Self::default()
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        if let Err(e) = self.save_to(Self::FILE_NAME) {
            log::warn!("Could not save settings: {}", e);
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(e) => log::warn!("Could not encode settings: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.frightened_ticks, 400);
        assert_eq!(config.dot_points, 10);
        assert_eq!(config.power_item_points, 50);
        assert_eq!(config.capture_points, 200);
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.tie_break, TieBreak::KeepHeading);
        assert_eq!(config.tick_duration(), Duration::from_millis(50));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            Settings::from_json(r#"{"engine":{"frightened_ticks":120,"tie_break":"nearest"},"seed":9}"#)
                .unwrap();
        assert_eq!(settings.engine.frightened_ticks, 120);
        assert_eq!(settings.engine.tie_break, TieBreak::Nearest);
        assert_eq!(settings.engine.dot_points, 10);
        assert_eq!(settings.seed, Some(9));
        assert!(settings.sound_enabled);
    }

    #[test]
    fn test_json_rejects_garbage_and_zero_cadence() {
        assert!(matches!(Settings::from_json("{"), Err(SettingsError::Json(_))));
        assert!(matches!(
            Settings::from_json(r#"{"engine":{"tick_ms":0}}"#),
            Err(SettingsError::Zero { field: "tick_ms" })
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut settings = Settings::default();
        settings
            .apply_vars(|name| match name {
                ENV_SEED => Some("77".to_string()),
                ENV_TICK_MS => Some(" 20 ".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(settings.seed, Some(77));
        assert_eq!(settings.engine.tick_ms, 20);

        let err = settings
            .apply_vars(|name| (name == ENV_SEED).then(|| "abc".to_string()))
            .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidEnv { name: ENV_SEED, .. }));
        // Untouched on failure
        assert_eq!(settings.seed, Some(77));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("maze_chase_settings_{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();
        let mut settings = Settings::default();
        settings.sound_enabled = false;
        settings.engine.capture_points = 400;
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
        let _ = std::fs::remove_file(&path);

        // Missing file is not an error
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }
}
