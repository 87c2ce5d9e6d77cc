use serde::{Deserialize, Serialize};
use std::path::Path;
use terrain::{TerrainConfig, TerrainError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("skip_frames must be a positive integer, got {0}")]
    InvalidSkipFrames(usize),
    #[error("invalid terrain config: {0}")]
    Terrain(#[from] TerrainError),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables of the Formicarium task. The defaults are the standard task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormicariumConfig {
    /// Physics sub-steps per environment step
    pub skip_frames: usize,
    /// The episode terminates once the ant passes this x position
    pub goal_x: f32,
    /// The episode is truncated once the ant drops below this height
    pub fall_z: f32,
    /// Reward added on the terminating step
    pub terminal_bonus: f32,
    /// Weight of the action-norm penalty
    pub cost_weight: f32,
    pub terrain: TerrainConfig,
}

impl Default for FormicariumConfig {
    fn default() -> Self {
        Self {
            skip_frames: 1,
            goal_x: 45.0,
            fall_z: -10.0,
            terminal_bonus: 10.0,
            cost_weight: 0.5,
            terrain: TerrainConfig::default(),
        }
    }
}

impl FormicariumConfig {
    /// Default task with the given number of sub-steps; `None` means 1.
    #[must_use]
    pub fn with_skip_frames(skip_frames: Option<usize>) -> Self {
        Self {
            skip_frames: skip_frames.unwrap_or(1),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON or
    /// [`ConfigError::InvalidSkipFrames`] if the result is invalid.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`FormicariumConfig::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSkipFrames`] for zero sub-steps and
    /// [`ConfigError::Terrain`] for an empty terrain resolution.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.skip_frames == 0 {
            return Err(ConfigError::InvalidSkipFrames(self.skip_frames));
        }
        self.terrain.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_terrain_is_rejected_when_loading() {
        let err = FormicariumConfig::from_json(r#"{ "terrain": { "rows": 0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Terrain(TerrainError::EmptyResolution { rows: 0, cols: 1000 })
        ));
    }

    #[test]
    fn zero_skip_frames_is_rejected() {
        let err = FormicariumConfig::from_json(r#"{ "skip_frames": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSkipFrames(0)));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(FormicariumConfig::default().validate().is_ok());
    }
}
