//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (frame delta)
//! - Keyboard state snapshots

pub mod clock;
pub mod input;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{Action, InputSnapshot, KeyState, ScriptedInput};
