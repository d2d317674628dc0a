//! One frame of simulation plus the draw calls that show it
//!
//! Ordering is fixed: ball, restart timer, input, then render. Rendering
//! always sees the fully updated state.

use glam::Vec2;

use super::ball::{BallEvent, step_ball};
use super::paddle::step_paddles;
use super::round::tick_restart_timer;
use super::state::GameState;
use crate::platform::input::{Action, InputSnapshot};
use crate::renderer::{ObjectId, RenderSurface};

/// Result of advancing one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// Quit was held; the host should stop looping
    pub quit: bool,
    pub ball_event: BallEvent,
}

/// Advance the simulation by one frame of `dt` seconds
pub fn advance_frame(state: &mut GameState, input: &impl InputSnapshot, dt: f32) -> FrameOutcome {
    let dt = dt.max(0.0);

    let ball_event = step_ball(state, dt);
    tick_restart_timer(state, dt);
    step_paddles(state, input, dt);
    state.frame += 1;

    FrameOutcome {
        quit: input.is_held(Action::Quit),
        ball_event,
    }
}

/// Issue the three quad draws for the current state
///
/// Paddles only move vertically; their x is baked into the geometry.
pub fn draw_frame(state: &GameState, surface: &mut impl RenderSurface) {
    surface.draw(ObjectId::LeftPaddle, Vec2::new(0.0, state.left.y));
    surface.draw(ObjectId::RightPaddle, Vec2::new(0.0, state.right.y));
    surface.draw(ObjectId::Ball, state.ball.pos);
}
