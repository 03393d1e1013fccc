//! Layered settings for the `tempo` binary
//!
//! Precedence (highest wins):
//! 1. Command-line flags
//! 2. Environment variables: `TEMPO_FPS`, `TEMPO_FPS_MAX`
//! 3. Config file: `--config <path>`, else `./tempo.toml` when present
//! 4. Built-in defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tempo_runtime::EngineConfig;

pub const DEFAULT_CONFIG_PATH: &str = "tempo.toml";

/// Which state the engine starts in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default = "default_initial_state")]
    pub initial_state: String,
}

fn default_initial_state() -> String {
    "menu".to_string()
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            initial_state: default_initial_state(),
        }
    }
}

/// Timing knobs for the demo states
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSettings {
    /// Seconds spent on the menu before play starts
    #[serde(default = "default_menu_seconds")]
    pub menu_seconds: f64,
    /// Length of one round of play
    #[serde(default = "default_round_seconds")]
    pub round_seconds: f64,
    /// Seconds spent paused between rounds
    #[serde(default = "default_pause_seconds")]
    pub pause_seconds: f64,
    /// Rounds played before quitting
    #[serde(default = "default_rounds")]
    pub rounds: i64,
    /// Score gained per second of play
    #[serde(default = "default_points_per_second")]
    pub points_per_second: f64,
    /// "easy", "normal" or "hard"
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_menu_seconds() -> f64 {
    1.0
}
fn default_round_seconds() -> f64 {
    2.0
}
fn default_pause_seconds() -> f64 {
    0.5
}
fn default_rounds() -> i64 {
    3
}
fn default_points_per_second() -> f64 {
    100.0
}
fn default_difficulty() -> String {
    "normal".to_string()
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            menu_seconds: default_menu_seconds(),
            round_seconds: default_round_seconds(),
            pause_seconds: default_pause_seconds(),
            rounds: default_rounds(),
            points_per_second: default_points_per_second(),
            difficulty: default_difficulty(),
        }
    }
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub game: GameSettings,
    #[serde(default)]
    pub demo: DemoSettings,
}

impl Settings {
    /// Load from `path`, or from `./tempo.toml` if it exists, or fall back to
    /// defaults. Environment overrides are applied in every case.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::load_file(Path::new(path))?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };
        settings.engine.apply_env_overrides()?;
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Apply command-line overrides on top of file and environment values.
    pub fn apply_flags(&mut self, initial: Option<String>, fps: Option<u32>, fps_max: Option<u32>) {
        if let Some(initial) = initial {
            self.game.initial_state = initial;
        }
        if let Some(fps) = fps {
            self.engine.fps = fps;
        }
        if let Some(fps_max) = fps_max {
            self.engine.fps_max = fps_max;
        }
    }
}
