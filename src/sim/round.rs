//! Round restart cooldown

use super::state::GameState;

/// Count the restart timer down by `dt`
///
/// Only `restart_timer > 0` matters to the serve gate, so the timer is
/// allowed to undershoot zero.
pub fn tick_restart_timer(state: &mut GameState, dt: f32) {
    if state.round.restart_timer > 0.0 {
        state.round.restart_timer -= dt;
        if state.round.restart_timer <= 0.0 {
            log::debug!("Restart cooldown finished");
        }
    }
}
