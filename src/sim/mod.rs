//! Frame simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep driven by the host clock
//! - Single owned `GameState`, no globals
//! - No rendering or platform dependencies beyond the two narrow traits

pub mod ball;
pub mod frame;
pub mod paddle;
pub mod round;
pub mod state;

pub use ball::{BallEvent, step_ball};
pub use frame::{FrameOutcome, advance_frame, draw_frame};
pub use paddle::step_paddles;
pub use round::tick_restart_timer;
pub use state::{Ball, GameState, Paddle, Round, RoundPhase, Side};
