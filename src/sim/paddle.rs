//! Paddle movement from held keys
//!
//! Holding any movement key also serves the ball once the restart
//! cooldown has run out. This is plain state inspection during input
//! handling; there is no event queue.

use super::state::{GameState, Side};
use crate::platform::input::{Action, InputSnapshot};

/// Up/down actions controlling one paddle
fn actions(side: Side) -> (Action, Action) {
    match side {
        Side::Left => (Action::MoveUpLeft, Action::MoveDownLeft),
        Side::Right => (Action::MoveUpRight, Action::MoveDownRight),
    }
}

/// Apply held movement keys to both paddles
///
/// Up is applied before down, so holding both nets zero movement
/// (unless the up move hit the clamp first).
pub fn step_paddles(state: &mut GameState, input: &impl InputSnapshot, dt: f32) {
    for side in [Side::Left, Side::Right] {
        step_paddle(state, side, input, dt);
    }
}

fn step_paddle(state: &mut GameState, side: Side, input: &impl InputSnapshot, dt: f32) {
    let (up, down) = actions(side);
    let distance = state.tuning.paddle_speed * dt;
    let bound = state.tuning.paddle_screen_bound;

    if input.is_held(up) {
        state.paddle_mut(side).shift(distance, bound);
        try_serve(state);
    }
    if input.is_held(down) {
        state.paddle_mut(side).shift(-distance, bound);
        try_serve(state);
    }
}

fn try_serve(state: &mut GameState) {
    if state.tuning.round_lifecycle && state.round.can_serve() {
        state.round.started = true;
        log::info!("Round started (frame {})", state.frame);
    }
}
