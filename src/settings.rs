//! Game Settings
//!
//! All tuning values in one place, grouped the same way they are edited:
//! screen, asset paths, timers, and per-entity tuning. Defaults are the
//! shipped game; `assets/settings.ron` may override any subset of fields.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the optional settings override file
pub const SETTINGS_PATH: &str = "assets/settings.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw collision outlines over every sprite
    pub debug: bool,
    /// Uniform scale applied to every loaded sprite
    pub scale_factor: f32,
    /// Frame rate cap (0 = unlocked)
    pub target_fps: u32,
    pub screen: ScreenSettings,
    pub paths: PathSettings,
    pub timers: TimerSettings,
    pub player: PlayerSettings,
    pub enemy: EnemySettings,
    pub bullet: BulletSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            scale_factor: 2.0,
            target_fps: 60,
            screen: ScreenSettings::default(),
            paths: PathSettings::default(),
            timers: TimerSettings::default(),
            player: PlayerSettings::default(),
            enemy: EnemySettings::default(),
            bullet: BulletSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a RON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the override file if there is one, otherwise use defaults.
    /// A broken file is reported and ignored rather than aborting start-up.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self.target_fps {
            0 => None,
            fps => Some(1.0 / fps as f64),
        }
    }
}

/// Display and window size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSettings {
    pub width: f32,
    pub height: f32,
    pub caption: String,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            caption: "Planes".to_string(),
        }
    }
}

/// Sprite file locations, relative to `assets_dir`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub assets_dir: PathBuf,
    pub player: PathBuf,
    pub bullet: PathBuf,
    pub enemy: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            player: PathBuf::from("sprites/player.png"),
            bullet: PathBuf::from("sprites/tile_0001.png"),
            enemy: PathBuf::from("sprites/ship_0022.png"),
        }
    }
}

impl PathSettings {
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.assets_dir.join(relative)
    }
}

/// Cooldowns, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    pub shoot_delay_ms: f64,
    pub enemy_spawn_delay_ms: f64,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            shoot_delay_ms: 500.0,
            enemy_spawn_delay_ms: 1000.0,
        }
    }
}

/// Player stats and flight model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub max_health: i32,
    /// Damage taken per enemy rammed
    pub collision_damage: i32,
    /// Pixels per second when flying up
    pub max_forward_speed: f32,
    /// Pixels per second when flying down
    pub max_backward_speed: f32,
    /// Pixels per second sideways
    pub max_strafe_speed: f32,
    pub forward_acceleration: f32,
    pub strafe_acceleration: f32,
    /// Deceleration rate on an axis with no input
    pub friction: f32,
    /// Max tilt in degrees
    pub max_bank_angle: f32,
    /// How fast the tilt follows input
    pub bank_speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            max_health: 100,
            collision_damage: 20,
            max_forward_speed: 400.0,
            max_backward_speed: 200.0,
            max_strafe_speed: 250.0,
            forward_acceleration: 12.0,
            strafe_acceleration: 8.0,
            friction: 5.0,
            max_bank_angle: 15.0,
            bank_speed: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemySettings {
    /// Pixels per tick
    pub speed: f32,
}

impl Default for EnemySettings {
    fn default() -> Self {
        Self { speed: 3.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletSettings {
    /// Pixels per tick
    pub speed: f32,
}

impl Default for BulletSettings {
    fn default() -> Self {
        Self { speed: 10.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(debug: true, player: (max_health: 50), timers: (shoot_delay_ms: 250.0))").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert!(settings.debug);
        assert_eq!(settings.player.max_health, 50);
        assert_eq!(settings.player.collision_damage, 20);
        assert_eq!(settings.timers.shoot_delay_ms, 250.0);
        assert_eq!(settings.timers.enemy_spawn_delay_ms, 1000.0);
        assert_eq!(settings.screen, ScreenSettings::default());
    }

    #[test]
    fn test_broken_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(debug: maybe").unwrap();

        assert!(matches!(Settings::load(file.path()), Err(SettingsError::Parse { .. })));
        assert_eq!(Settings::load_or_default(file.path()), Settings::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.ron");
        assert!(matches!(Settings::load(&path), Err(SettingsError::Io { .. })));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_shipped_file_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(SETTINGS_PATH);
        assert_eq!(Settings::load(path).unwrap(), Settings::default());
    }

    #[test]
    fn test_frame_time() {
        let mut settings = Settings::default();
        assert!((settings.frame_time().unwrap() - 1.0 / 60.0).abs() < 1e-9);
        settings.target_fps = 0;
        assert_eq!(settings.frame_time(), None);
    }
}
