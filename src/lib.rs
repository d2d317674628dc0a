//! Quad Pong - classic two-paddle Pong drawn as three quads
//!
//! Core modules:
//! - `sim`: Frame simulation (ball, paddles, round lifecycle)
//! - `renderer`: Render surface trait and the WebGPU quad pipeline
//! - `platform`: Clock and keyboard snapshot abstractions
//! - `tuning`: Gameplay constants with optional JSON overrides
//! - `game`: Host-agnostic frame loop tying the pieces together

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants (normalized device coordinates, seconds)
pub mod consts {
    /// Paddle centre never leaves [-bound, +bound]
    pub const PADDLE_SCREEN_BOUND: f32 = 0.85;
    /// Paddle vertical speed (NDC units per second)
    pub const PADDLE_MOVE_SPEED: f32 = 2.5;

    /// Fixed collision planes, independent of paddle geometry
    pub const LEFT_PADDLE_BALL_COLLISION_X: f32 = -0.955;
    pub const RIGHT_PADDLE_BALL_COLLISION_X: f32 = 0.955;
    pub const PADDLE_WIDTH: f32 = 0.03;
    pub const HALF_PADDLE_HEIGHT: f32 = 0.125;

    /// Ball leaves play once |x| passes this
    pub const BALL_MISS_X: f32 = 1.0;
    pub const BALL_X_SPEED: f32 = 0.5;
    pub const BALL_Y_SPEED: f32 = 0.1;
    pub const BALL_SCREEN_BOUND: f32 = 0.95;
    /// Ball quad edge length
    pub const BALL_SIZE: f32 = 0.015;

    /// Seconds after a miss before input can serve again
    pub const ROUND_RESTART_DELAY: f32 = 1.0;

    /// Fixed window aspect (1920x1080)
    pub const SCREEN_WIDTH: u32 = 1920;
    pub const SCREEN_HEIGHT: u32 = 1080;
}
