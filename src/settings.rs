//! Game settings
//!
//! Loaded from an optional JSON file. Every field has a default, so a file
//! only needs the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Color;

/// Why a settings file could not be used
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable gameplay values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame rate the tick loop is paced to
    pub frames_per_second: u32,
    /// Paddle displacement per tick while a key is held
    pub paddle_speed: f64,
    /// Paddle width (height is fixed)
    pub paddle_width: f64,
    /// Radius of every ball
    pub ball_radius: f64,
    /// Launch speed of the first ball; each following ball is one unit faster
    pub ball_speed: f64,
    /// One ball is launched per color
    pub ball_colors: Vec<Color>,
    /// Points per block notification
    pub block_hit_score: i64,
    /// Bonus for clearing every block
    pub clear_bonus: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frames_per_second: FRAMES_PER_SECOND,
            paddle_speed: PADDLE_SPEED,
            paddle_width: PADDLE_WIDTH,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_colors: vec![Color::YELLOW, Color::GREEN, Color::RED],
            block_hit_score: BLOCK_HIT_SCORE,
            clear_bonus: CLEAR_BONUS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field, reason| Err(SettingsError::Invalid { field, reason });
        if self.frames_per_second == 0 {
            return invalid("frames_per_second", "must be at least 1");
        }
        if !(self.paddle_speed > 0.0) {
            return invalid("paddle_speed", "must be positive");
        }
        if !(self.paddle_width > 0.0 && self.paddle_width <= SCREEN_WIDTH - 2.0 * WALL_THICKNESS) {
            return invalid("paddle_width", "must be positive and fit between the walls");
        }
        if !(self.ball_radius > 0.0) {
            return invalid("ball_radius", "must be positive");
        }
        if !(self.ball_speed > 0.0) {
            return invalid("ball_speed", "must be positive");
        }
        if self.ball_colors.is_empty() {
            return invalid("ball_colors", "needs at least one ball");
        }
        if self.ball_colors.contains(&Color::DEATH_REGION) {
            return invalid("ball_colors", "must not match the death region color");
        }
        Ok(())
    }

    /// Milliseconds available per frame
    pub fn frame_millis(&self) -> u64 {
        1000 / u64::from(self.frames_per_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.frame_millis(), 16);
        assert_eq!(s.ball_colors.len(), 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "paddle_speed": 12.5 }"#).unwrap();
        assert_eq!(s.paddle_speed, 12.5);
        assert_eq!(s.paddle_width, PADDLE_WIDTH);
        assert_eq!(s.block_hit_score, BLOCK_HIT_SCORE);
    }

    #[test]
    fn test_colors_from_json() {
        let s = Settings::from_json(r#"{ "ball_colors": [{ "r": 1, "g": 2, "b": 3 }] }"#).unwrap();
        assert_eq!(s.ball_colors, vec![Color::rgb(1, 2, 3)]);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "frames_per_second": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "frames_per_second",
                ..
            }
        ));

        let err = Settings::from_json(r#"{ "ball_colors": [] }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "ball_colors", .. }));

        // A blue ball would bounce off the death region forever
        let err = Settings::from_json(
            r#"{ "ball_colors": [{ "r": 255, "g": 0, "b": 0 }, { "r": 0, "g": 0, "b": 255 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "ball_colors", .. }));

        let err = Settings::from_json(r#"{ "paddle_width": 5000 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "paddle_width", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse settings"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/definitely/not/here/settings.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
    }
}
