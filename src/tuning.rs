//! Data-driven game tuning
//!
//! Defaults mirror `consts`. Overrides come from a JSON file on native
//! and LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Paddles ===
    pub paddle_screen_bound: f32,
    pub paddle_speed: f32,
    pub half_paddle_height: f32,
    pub paddle_width: f32,
    pub left_collision_x: f32,
    pub right_collision_x: f32,

    // === Ball ===
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub ball_screen_bound: f32,
    /// Past this |x| the ball has missed
    pub ball_miss_x: f32,

    // === Round ===
    pub round_restart_delay: f32,

    // === Variants ===
    /// Ball moves and bounces vertically
    pub y_bounce: bool,
    /// Ball waits for a serve and a restart delay after each miss
    pub round_lifecycle: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_screen_bound: PADDLE_SCREEN_BOUND,
            paddle_speed: PADDLE_MOVE_SPEED,
            half_paddle_height: HALF_PADDLE_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            left_collision_x: LEFT_PADDLE_BALL_COLLISION_X,
            right_collision_x: RIGHT_PADDLE_BALL_COLLISION_X,

            ball_speed_x: BALL_X_SPEED,
            ball_speed_y: BALL_Y_SPEED,
            ball_screen_bound: BALL_SCREEN_BOUND,
            ball_miss_x: BALL_MISS_X,

            round_restart_delay: ROUND_RESTART_DELAY,

            y_bounce: true,
            round_lifecycle: true,
        }
    }
}

impl Tuning {
    /// Always-moving, horizontal-only play with no serve or restart delay
    pub fn classic() -> Self {
        Self {
            y_bounce: false,
            round_lifecycle: false,
            ..Self::default()
        }
    }

    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("paddle_screen_bound", self.paddle_screen_bound),
            ("paddle_speed", self.paddle_speed),
            ("half_paddle_height", self.half_paddle_height),
            ("paddle_width", self.paddle_width),
            ("ball_speed_x", self.ball_speed_x),
            ("ball_speed_y", self.ball_speed_y),
            ("ball_screen_bound", self.ball_screen_bound),
            ("ball_miss_x", self.ball_miss_x),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidTuning(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.round_restart_delay.is_finite() && self.round_restart_delay >= 0.0) {
            return Err(Error::InvalidTuning(format!(
                "round_restart_delay must be non-negative, got {}",
                self.round_restart_delay
            )));
        }
        if self.left_collision_x >= self.right_collision_x {
            return Err(Error::InvalidTuning(
                "left_collision_x must be left of right_collision_x".into(),
            ));
        }
        if self.right_collision_x >= self.ball_miss_x || self.left_collision_x <= -self.ball_miss_x {
            return Err(Error::InvalidTuning(
                "collision planes must lie inside the miss threshold".into(),
            ));
        }
        Ok(())
    }

    /// Environment variable naming a tuning file (native)
    pub const ENV_VAR: &'static str = "QUAD_PONG_TUNING";

    /// Load tuning from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the given path, or `QUAD_PONG_TUNING`, else defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&str>) -> Self {
        let path = path
            .map(str::to_owned)
            .or_else(|| std::env::var(Self::ENV_VAR).ok());

        match path {
            Some(path) => match Self::load_file(&path) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning file {}: {}", path, e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "quad_pong_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.paddle_screen_bound, PADDLE_SCREEN_BOUND);
        assert_eq!(tuning.left_collision_x, LEFT_PADDLE_BALL_COLLISION_X);
        assert_eq!(tuning.round_restart_delay, ROUND_RESTART_DELAY);
        assert!(tuning.y_bounce && tuning.round_lifecycle);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "ball_speed_x": 0.8, "y_bounce": false }"#).unwrap();
        assert_eq!(tuning.ball_speed_x, 0.8);
        assert!(!tuning.y_bounce);
        assert_eq!(tuning.paddle_speed, PADDLE_MOVE_SPEED);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::classic();
        let parsed = Tuning::from_json(&tuning.to_json().unwrap()).unwrap();
        assert_eq!(parsed, tuning);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "paddle_speed": -1.0 }"#),
            Err(Error::InvalidTuning(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "left_collision_x": 0.96 }"#),
            Err(Error::InvalidTuning(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "right_collision_x": 1.2 }"#),
            Err(Error::InvalidTuning(_))
        ));
        assert!(matches!(Tuning::from_json("not json"), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
