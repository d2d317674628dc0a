//! Game state and core simulation types
//!
//! One owned aggregate; controllers receive it by `&mut`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Which side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Derived phase of the round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Ball centred, next movement key serves
    WaitingToStart,
    /// Ball is moving
    InPlay,
    /// Ball centred, restart timer still running
    RoundOver,
}

/// A paddle; x and extent are fixed by tuning
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Vertical centre offset (NDC)
    pub y: f32,
}

impl Paddle {
    /// Whether `y` lies on the paddle face (inclusive)
    pub fn covers(&self, y: f32, half_height: f32) -> bool {
        y <= self.y + half_height && y >= self.y - half_height
    }

    /// Move by `delta`, clamped to `[-bound, bound]`
    pub fn shift(&mut self, delta: f32, bound: f32) {
        self.y = (self.y + delta).clamp(-bound, bound);
    }
}

/// The ball. Direction components are always +1 or -1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            // First serve goes left and down
            dir: Vec2::new(-1.0, -1.0),
        }
    }
}

impl Ball {
    /// Per-axis velocity for the given speeds
    pub fn velocity(&self, speed: Vec2) -> Vec2 {
        self.dir * speed
    }

    /// Side the ball is travelling toward, if any
    pub fn heading(&self) -> Option<Side> {
        if self.dir.x < 0.0 {
            Some(Side::Left)
        } else if self.dir.x > 0.0 {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Back to centre, serving the opposite way
    pub fn recentre(&mut self) {
        self.pos = Vec2::ZERO;
        self.dir.x = -self.dir.x;
    }
}

/// Round lifecycle: serve gate plus restart cooldown
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub started: bool,
    /// Counts down after a miss; input cannot serve while > 0
    pub restart_timer: f32,
}

impl Round {
    pub fn phase(&self) -> RoundPhase {
        if self.started {
            RoundPhase::InPlay
        } else if self.restart_timer > 0.0 {
            RoundPhase::RoundOver
        } else {
            RoundPhase::WaitingToStart
        }
    }

    /// Whether a movement key may serve right now
    pub fn can_serve(&self) -> bool {
        !self.started && self.restart_timer <= 0.0
    }

    /// End the round and start the cooldown
    pub fn end(&mut self, delay: f32) {
        self.started = false;
        self.restart_timer = delay;
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub round: Round,
    /// Frames simulated so far
    pub frame: u64,
    pub tuning: Tuning,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            left: Paddle::default(),
            right: Paddle::default(),
            ball: Ball::default(),
            round: Round::default(),
            frame: 0,
            tuning,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Ball speed per axis; y is zero when vertical motion is off
    pub fn ball_speed(&self) -> Vec2 {
        let y = if self.tuning.y_bounce {
            self.tuning.ball_speed_y
        } else {
            0.0
        };
        Vec2::new(self.tuning.ball_speed_x, y)
    }

    /// Whether the ball integrates this frame
    pub fn ball_moving(&self) -> bool {
        !self.tuning.round_lifecycle || self.round.started
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_waits_for_serve() {
        let state = GameState::default();
        assert_eq!(state.round.phase(), RoundPhase::WaitingToStart);
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(state.ball.heading(), Some(Side::Left));
        assert!(!state.ball_moving());
    }

    #[test]
    fn test_paddle_covers_is_inclusive() {
        let paddle = Paddle { y: 0.5 };
        assert!(paddle.covers(0.625, 0.125));
        assert!(paddle.covers(0.375, 0.125));
        assert!(!paddle.covers(0.63, 0.125));
        assert!(!paddle.covers(0.37, 0.125));
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let mut paddle = Paddle::default();
        paddle.shift(5.0, 0.85);
        assert_eq!(paddle.y, 0.85);
        paddle.shift(-5.0, 0.85);
        assert_eq!(paddle.y, -0.85);
    }

    #[test]
    fn test_round_phases() {
        let mut round = Round::default();
        assert!(round.can_serve());
        round.started = true;
        assert_eq!(round.phase(), RoundPhase::InPlay);
        round.end(1.0);
        assert_eq!(round.phase(), RoundPhase::RoundOver);
        assert!(!round.can_serve());
        round.restart_timer = -0.01;
        assert_eq!(round.phase(), RoundPhase::WaitingToStart);
    }

    #[test]
    fn test_classic_variant_always_moves() {
        let state = GameState::new(Tuning::classic());
        assert!(state.ball_moving());
        assert_eq!(state.ball_speed().y, 0.0);
    }
}
