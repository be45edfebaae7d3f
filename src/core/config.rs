//! Presentation configuration: an explicit, validated settings record.
//!
//! The host used to hold these settings in ambient key/value storage
//! with silent fallback. Here they are a plain struct the presentation
//! layer receives at initialization; load and save are explicit and
//! return typed errors so the caller decides what a failure means.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid value for {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

/// Settings the presentation layer needs at startup.
///
/// Speeds are normalized to `0.0..=1.0` (slow to fast); `font_size` is
/// in pixels. Defaults match the shipped experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub breathing_effect: bool,
    pub keyboard_shortcut: bool,
    pub fullscreen_dbl_click: bool,
    pub auto_speed: f32,
    pub font_size: u32,
    pub text_speed: f32,
    pub opacity: f32,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            breathing_effect: true,
            keyboard_shortcut: true,
            fullscreen_dbl_click: true,
            auto_speed: 0.5,
            font_size: 24,
            text_speed: 0.5,
            opacity: 0.8,
        }
    }
}

impl PresentationConfig {
    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("auto_speed", self.auto_speed)?;
        check_unit("text_speed", self.text_speed)?;
        check_unit("opacity", self.opacity)?;
        if !(16..=32).contains(&self.font_size) {
            return Err(ConfigError::Validation {
                field: "font_size",
                message: format!("expected 16..=32 px, got {}", self.font_size),
            });
        }
        Ok(())
    }

    /// Parse and validate a config from a RON string.
    pub fn parse_ron(input: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Serialize to a RON string. Refuses to serialize invalid values.
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        self.validate()?;
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Validate and write to a RON file.
    pub fn save_to_ron(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_ron()?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// The permissive startup entry: any load failure falls back to
    /// defaults instead of surfacing to the caller.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from_ron(path).unwrap_or_default()
    }

    /// Typewriter delay between characters, in milliseconds.
    /// `text_speed` 0.0 is 100ms, 1.0 is 10ms.
    pub fn typing_interval_ms(&self) -> u32 {
        (100.0 - self.text_speed * 90.0).round() as u32
    }

    /// Delay before auto-advancing a finished line, in milliseconds.
    /// `auto_speed` 0.0 is 3000ms, 1.0 is 500ms.
    pub fn auto_play_delay_ms(&self) -> u32 {
        (3000.0 - self.auto_speed * 2500.0).round() as u32
    }
}

fn check_unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Validation {
            field,
            message: format!("expected 0.0..=1.0, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PresentationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.font_size, 24);
        assert!(config.breathing_effect);
    }

    #[test]
    fn validation_catches_out_of_range() {
        let config = PresentationConfig {
            opacity: 1.5,
            ..PresentationConfig::default()
        };
        match config.validate() {
            Err(ConfigError::Validation { field, .. }) => assert_eq!(field, "opacity"),
            other => panic!("expected validation error, got {other:?}"),
        }

        let config = PresentationConfig {
            font_size: 40,
            ..PresentationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation {
                field: "font_size",
                ..
            })
        ));
    }

    #[test]
    fn ron_round_trip() {
        let config = PresentationConfig {
            text_speed: 0.9,
            font_size: 18,
            ..PresentationConfig::default()
        };
        let ron = config.to_ron().unwrap();
        let parsed = PresentationConfig::parse_ron(&ron).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let parsed = PresentationConfig::parse_ron("(font_size: 30)").unwrap();
        assert_eq!(parsed.font_size, 30);
        assert_eq!(parsed.opacity, 0.8);
        assert!(parsed.keyboard_shortcut);
    }

    #[test]
    fn invalid_values_fail_parse() {
        assert!(PresentationConfig::parse_ron("(auto_speed: 2.0)").is_err());
        assert!(PresentationConfig::parse_ron("not ron at all").is_err());
    }

    #[test]
    fn to_ron_refuses_invalid() {
        let config = PresentationConfig {
            auto_speed: -0.1,
            ..PresentationConfig::default()
        };
        assert!(config.to_ron().is_err());
    }

    #[test]
    fn derived_timings() {
        let config = PresentationConfig::default();
        assert_eq!(config.typing_interval_ms(), 55);
        assert_eq!(config.auto_play_delay_ms(), 1750);

        let slow = PresentationConfig {
            text_speed: 0.0,
            auto_speed: 0.0,
            ..PresentationConfig::default()
        };
        assert_eq!(slow.typing_interval_ms(), 100);
        assert_eq!(slow.auto_play_delay_ms(), 3000);

        let fast = PresentationConfig {
            text_speed: 1.0,
            auto_speed: 1.0,
            ..PresentationConfig::default()
        };
        assert_eq!(fast.typing_interval_ms(), 10);
        assert_eq!(fast.auto_play_delay_ms(), 500);
    }

    #[test]
    fn load_or_default_falls_back() {
        let config = PresentationConfig::load_or_default(Path::new("does/not/exist.ron"));
        assert_eq!(config, PresentationConfig::default());
    }
}
