//! Engine configuration
//!
//! Loaded with two layers of precedence (highest wins):
//! 1. Environment variables: `TEMPO_FPS`, `TEMPO_FPS_MAX`
//! 2. The `[engine]` table of a TOML file

use serde::{Deserialize, Serialize};
use std::path::Path;
use tempo_core::{Result, TempoError};

pub const ENV_FPS: &str = "TEMPO_FPS";
pub const ENV_FPS_MAX: &str = "TEMPO_FPS_MAX";

/// Frame-rate settings for the engine loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rate the time source paces frames to
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Source of the per-frame delta ceiling, see [`EngineConfig::time_delta_min`]
    #[serde(default = "default_fps_max")]
    pub fps_max: u32,
}

fn default_fps() -> u32 {
    60
}
fn default_fps_max() -> u32 {
    120
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            fps_max: default_fps_max(),
        }
    }
}

/// File wrapper so the engine table can live beside other sections
#[derive(Debug, Default, Deserialize)]
struct EngineConfigFile {
    #[serde(default)]
    engine: EngineConfig,
}

impl EngineConfig {
    pub fn new(fps: u32, fps_max: u32) -> Self {
        Self { fps, fps_max }
    }

    /// Ceiling applied to every frame delta, in seconds.
    ///
    /// Derived as `fps_max / 1000`, so `fps_max = 120` caps a frame at 0.12s.
    pub fn time_delta_min(&self) -> f64 {
        self.fps_max as f64 / 1000.0
    }

    /// Reject rates the loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(TempoError::InvalidConfig("fps must be greater than 0".into()));
        }
        if self.fps_max == 0 {
            return Err(TempoError::InvalidConfig(
                "fps_max must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Parse the `[engine]` table of a TOML document. Missing keys use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: EngineConfigFile = toml::from_str(content)?;
        Ok(file.engine)
    }

    /// Load from a TOML file, then apply environment overrides.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content).map_err(|e| match e {
            TempoError::TomlParseError(msg) => {
                TempoError::TomlParseError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `TEMPO_FPS` / `TEMPO_FPS_MAX` from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_FPS) {
            self.fps = parse_rate(ENV_FPS, &value)?;
        }
        if let Some(value) = lookup(ENV_FPS_MAX) {
            self.fps_max = parse_rate(ENV_FPS_MAX, &value)?;
        }
        Ok(())
    }
}

fn parse_rate(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| TempoError::InvalidConfig(format!("{key} must be an integer, got '{value}'")))
}
