//! Ball integration and collision response
//!
//! Collision is deliberately approximate: each paddle is a fixed x plane
//! plus a y range around the paddle centre. Paddle motion only changes
//! the y range, never the plane.

use super::state::{GameState, Side};

/// What happened to the ball during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallEvent {
    #[default]
    None,
    /// Bounced off the top or bottom bound
    WallBounce,
    /// Returned by the paddle on this side
    PaddleBounce(Side),
    /// Got past the paddle on this side
    Miss(Side),
}

/// Advance the ball by `dt` seconds and resolve collisions
pub fn step_ball(state: &mut GameState, dt: f32) -> BallEvent {
    if !state.ball_moving() {
        return BallEvent::None;
    }

    let speed = state.ball_speed();
    let velocity = state.ball.velocity(speed);
    state.ball.pos += velocity * dt;

    let mut event = BallEvent::None;

    // No position correction; the flipped direction pulls the ball back next frame
    if state.tuning.y_bounce {
        let bound = state.tuning.ball_screen_bound;
        if state.ball.pos.y <= -bound || state.ball.pos.y >= bound {
            state.ball.dir.y = -state.ball.dir.y;
            event = BallEvent::WallBounce;
        }
    }

    // Heading is fixed before the paddle check so a bounce cannot
    // re-enter the other side's branch in the same step
    let Some(side) = state.ball.heading() else {
        return event;
    };

    if !past_collision_plane(state, side) {
        return event;
    }

    let half_height = state.tuning.half_paddle_height;
    if state.paddle(side).covers(state.ball.pos.y, half_height) {
        state.ball.dir.x = -state.ball.dir.x;
        log::debug!("Paddle bounce ({:?}) at {:?}", side, state.ball.pos);
        event = BallEvent::PaddleBounce(side);
    }

    // Miss only counts while still travelling toward that edge
    if state.ball.heading() == Some(side) && past_miss_threshold(state, side) {
        end_round(state);
        log::info!("{:?} paddle missed, round over", side);
        event = BallEvent::Miss(side);
    }

    event
}

fn past_collision_plane(state: &GameState, side: Side) -> bool {
    let x = state.ball.pos.x;
    match side {
        Side::Left => x <= state.tuning.left_collision_x,
        Side::Right => x >= state.tuning.right_collision_x,
    }
}

fn past_miss_threshold(state: &GameState, side: Side) -> bool {
    let x = state.ball.pos.x;
    match side {
        Side::Left => x < -state.tuning.ball_miss_x,
        Side::Right => x > state.tuning.ball_miss_x,
    }
}

/// Recentre after a miss. Without the lifecycle only x resets
fn end_round(state: &mut GameState) {
    if state.tuning.round_lifecycle {
        state.ball.recentre();
        state.round.end(state.tuning.round_restart_delay);
    } else {
        state.ball.pos.x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::RoundPhase;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    const EPS: f32 = 1e-5;

    fn in_play() -> GameState {
        let mut state = GameState::default();
        state.round.started = true;
        state
    }

    #[test]
    fn test_frozen_until_started() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(0.3, 0.2);
        assert_eq!(step_ball(&mut state, 0.5), BallEvent::None);
        assert_eq!(state.ball.pos, Vec2::new(0.3, 0.2));
    }

    #[test]
    fn test_linear_integration() {
        let mut state = in_play();
        state.ball.dir = Vec2::new(1.0, 1.0);
        step_ball(&mut state, 0.2);
        assert!((state.ball.pos.x - BALL_X_SPEED * 0.2).abs() < EPS);
        assert!((state.ball.pos.y - BALL_Y_SPEED * 0.2).abs() < EPS);
    }

    #[test]
    fn test_wall_bounce_flips_only_y() {
        let mut state = in_play();
        state.ball.pos = Vec2::new(0.0, BALL_SCREEN_BOUND);
        state.ball.dir = Vec2::new(1.0, 1.0);
        assert_eq!(step_ball(&mut state, 0.01), BallEvent::WallBounce);
        assert_eq!(state.ball.dir, Vec2::new(1.0, -1.0));
        // Not clamped back inside
        assert!(state.ball.pos.y > BALL_SCREEN_BOUND);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = in_play();
        state.ball.pos = Vec2::new(0.0, -BALL_SCREEN_BOUND + 0.0001);
        state.ball.dir = Vec2::new(-1.0, -1.0);
        assert_eq!(step_ball(&mut state, 0.01), BallEvent::WallBounce);
        assert_eq!(state.ball.dir, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_left_paddle_bounce() {
        let mut state = in_play();
        state.left.y = 0.2;
        state.ball.pos = Vec2::new(-0.96, 0.25);
        state.ball.dir = Vec2::new(-1.0, 1.0);
        let event = step_ball(&mut state, 0.0);
        assert_eq!(event, BallEvent::PaddleBounce(Side::Left));
        assert_eq!(state.ball.dir.x, 1.0);
    }

    #[test]
    fn test_no_bounce_outside_paddle_range() {
        let mut state = in_play();
        state.left.y = 0.0;
        state.ball.pos = Vec2::new(-0.96, 0.5);
        state.ball.dir = Vec2::new(-1.0, 1.0);
        assert_eq!(step_ball(&mut state, 0.0), BallEvent::None);
        assert_eq!(state.ball.dir.x, -1.0);
    }

    #[test]
    fn test_right_paddle_bounce() {
        let mut state = in_play();
        state.right.y = -0.4;
        state.ball.pos = Vec2::new(0.96, -0.5);
        state.ball.dir = Vec2::new(1.0, -1.0);
        assert_eq!(step_ball(&mut state, 0.0), BallEvent::PaddleBounce(Side::Right));
        assert_eq!(state.ball.dir.x, -1.0);
    }

    #[test]
    fn test_moving_away_never_bounces() {
        let mut state = in_play();
        state.ball.pos = Vec2::new(-0.97, 0.0);
        state.ball.dir = Vec2::new(1.0, 1.0);
        step_ball(&mut state, 0.0);
        assert_eq!(state.ball.dir.x, 1.0);
    }

    #[test]
    fn test_miss_resets_round() {
        let mut state = in_play();
        state.left.y = 0.6;
        state.ball.pos = Vec2::new(-0.99, -0.3);
        state.ball.dir = Vec2::new(-1.0, -1.0);
        let event = step_ball(&mut state, 0.1);
        assert_eq!(event, BallEvent::Miss(Side::Left));
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(state.ball.dir.x, 1.0);
        assert!(!state.round.started);
        assert_eq!(state.round.restart_timer, ROUND_RESTART_DELAY);
        assert_eq!(state.round.phase(), RoundPhase::RoundOver);
    }

    #[test]
    fn test_right_miss_serves_left() {
        let mut state = in_play();
        state.right.y = -0.6;
        state.ball.pos = Vec2::new(0.99, 0.3);
        state.ball.dir = Vec2::new(1.0, 1.0);
        assert_eq!(step_ball(&mut state, 0.1), BallEvent::Miss(Side::Right));
        assert_eq!(state.ball.dir.x, -1.0);
    }

    #[test]
    fn test_bounce_beyond_miss_line_is_not_a_miss() {
        let mut state = in_play();
        state.ball.pos = Vec2::new(-1.05, 0.0);
        state.ball.dir = Vec2::new(-1.0, 1.0);
        assert_eq!(step_ball(&mut state, 0.0), BallEvent::PaddleBounce(Side::Left));
        assert!(state.round.started);
        assert_eq!(state.ball.dir.x, 1.0);
    }

    #[test]
    fn test_classic_miss_only_resets_x() {
        let mut state = GameState::new(Tuning::classic());
        state.left.y = 0.6;
        state.ball.pos = Vec2::new(-0.99, 0.0);
        state.ball.dir = Vec2::new(-1.0, 1.0);
        assert_eq!(step_ball(&mut state, 0.1), BallEvent::Miss(Side::Left));
        assert_eq!(state.ball.pos.x, 0.0);
        assert_eq!(state.ball.dir.x, -1.0);
        assert_eq!(state.round.restart_timer, 0.0);
    }

    #[test]
    fn test_classic_has_no_vertical_motion() {
        let mut state = GameState::new(Tuning::classic());
        state.ball.pos = Vec2::new(0.0, 0.3);
        step_ball(&mut state, 1.0);
        assert_eq!(state.ball.pos.y, 0.3);
        assert_eq!(state.ball.dir.y, -1.0);
    }

    #[test]
    fn test_two_step_paddle_scenario() {
        let mut state = in_play();
        state.left.y = 0.0;
        state.ball.pos = Vec2::new(-0.90, 0.0);
        state.ball.dir = Vec2::new(-1.0, 1.0);
        state.tuning.y_bounce = false;

        assert_eq!(step_ball(&mut state, 0.1), BallEvent::None);
        assert!((state.ball.pos.x + 0.95).abs() < EPS);
        assert_eq!(state.ball.dir.x, -1.0);

        assert_eq!(step_ball(&mut state, 0.1), BallEvent::PaddleBounce(Side::Left));
        assert!((state.ball.pos.x + 1.0).abs() < EPS);
        assert_eq!(state.ball.dir.x, 1.0);
        assert!(state.round.started);
    }

    proptest! {
        #[test]
        fn prop_integration_is_linear(
            x in -0.5f32..0.5,
            y in -0.5f32..0.5,
            dx in prop::bool::ANY,
            dy in prop::bool::ANY,
            dt in 0.0f32..0.5,
        ) {
            let mut state = in_play();
            let dir = Vec2::new(if dx { 1.0 } else { -1.0 }, if dy { 1.0 } else { -1.0 });
            state.ball.pos = Vec2::new(x, y);
            state.ball.dir = dir;
            step_ball(&mut state, dt);
            prop_assert!((state.ball.pos.x - (x + dir.x * BALL_X_SPEED * dt)).abs() < EPS);
            prop_assert!((state.ball.pos.y - (y + dir.y * BALL_Y_SPEED * dt)).abs() < EPS);
            prop_assert_eq!(state.ball.dir, dir);
        }

        #[test]
        fn prop_direction_stays_unit(
            x in -1.2f32..1.2,
            y in -1.0f32..1.0,
            paddle in -0.85f32..0.85,
            dt in 0.0f32..0.1,
        ) {
            let mut state = in_play();
            state.left.y = paddle;
            state.right.y = -paddle;
            state.ball.pos = Vec2::new(x, y);
            step_ball(&mut state, dt);
            prop_assert_eq!(state.ball.dir.x.abs(), 1.0);
            prop_assert_eq!(state.ball.dir.y.abs(), 1.0);
        }
    }
}
