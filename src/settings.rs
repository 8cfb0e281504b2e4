//! Client settings
//!
//! Read once at startup from a JSON file next to the binary; missing fields
//! take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::BoardGeometry;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Border the paddle may not enter
    pub border_width: f32,
    /// Total height of each goal mouth
    pub goal_mouth_height: f32,

    // === Paddle control ===
    /// Paddle covers 1/divisor of the remaining distance per frame
    pub smooth_divisor: f32,
    /// Seconds without drag before the settled position is re-sent
    pub idle_push_delay: f32,

    // === Identity ===
    pub player_name: String,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Demo ===
    /// Seed for the scripted demo session
    pub demo_seed: u64,
    /// Frames the demo session runs before the peer ends the match
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            border_width: BORDER_WIDTH,
            goal_mouth_height: GOAL_MOUTH_HEIGHT,

            smooth_divisor: SMOOTH_DIVISOR,
            idle_push_delay: IDLE_PUSH_DELAY,

            player_name: "player".to_string(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            demo_seed: 12345,
            demo_frames: 1200,
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "neon_hockey_settings.json";

    /// Load from the default file, falling back to defaults
    pub fn load() -> Self {
        match Self::load_from(Self::FILE_NAME) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Self::FILE_NAME);
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", Self::FILE_NAME, e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field, reason: &str| {
            Err(SettingsError::Invalid {
                field,
                reason: reason.to_string(),
            })
        };

        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return invalid("screen_width", "screen must have a positive size");
        }
        if self.border_width < 0.0 || self.border_width * 2.0 >= self.screen_height.min(self.screen_width) {
            return invalid("border_width", "border leaves no playing field");
        }
        if !(0.0..=self.screen_height).contains(&self.goal_mouth_height) {
            return invalid("goal_mouth_height", "goal mouth must fit the field height");
        }
        if !(self.smooth_divisor >= 1.0) {
            return invalid("smooth_divisor", "must be at least 1");
        }
        if !(self.idle_push_delay >= 0.0) {
            return invalid("idle_push_delay", "must not be negative");
        }
        Ok(())
    }

    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry {
            width: self.screen_width,
            height: self.screen_height,
            border: self.border_width,
            goal_mouth: self.goal_mouth_height,
        }
    }
}
