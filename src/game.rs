//! Host-agnostic frame loop
//!
//! One call to `Game::frame` is one display frame: read the clock,
//! simulate, render, present. Hosts only supply the clock, the key
//! snapshot and the render surface.

use crate::platform::clock::Clock;
use crate::platform::input::{InputSnapshot, ScriptedInput};
use crate::renderer::RenderSurface;
use crate::sim::{FrameOutcome, GameState, RoundPhase, advance_frame, draw_frame};
use crate::tuning::Tuning;

/// Largest delta fed to the simulation in one frame
pub const MAX_FRAME_DT: f32 = 0.1;

/// Game instance holding all state
pub struct Game<C: Clock> {
    pub state: GameState,
    clock: C,
    last_phase: RoundPhase,
    running: bool,
}

impl<C: Clock> Game<C> {
    pub fn new(tuning: Tuning, clock: C) -> Self {
        let state = GameState::new(tuning);
        let last_phase = state.round.phase();
        Self {
            state,
            clock,
            last_phase,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Simulate and render one frame
    pub fn frame(
        &mut self,
        input: &impl InputSnapshot,
        surface: &mut impl RenderSurface,
    ) -> FrameOutcome {
        let dt = self.clock.delta_secs().min(MAX_FRAME_DT);
        let outcome = advance_frame(&mut self.state, input, dt);

        let phase = self.state.round.phase();
        if phase != self.last_phase {
            log::info!("Round phase {:?} -> {:?}", self.last_phase, phase);
            self.last_phase = phase;
        }

        draw_frame(&self.state, surface);
        if let Err(e) = surface.present() {
            match e {
                crate::Error::Surface(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                e => log::warn!("Render error: {}", e),
            }
        }

        if outcome.quit {
            log::info!("Quit requested after {} frames", self.state.frame);
            self.running = false;
        }
        outcome
    }

    /// Play a recorded key script until it runs out, quit is held,
    /// or `max_frames` have run. Returns the number of frames played.
    pub fn run_scripted(
        &mut self,
        input: &mut ScriptedInput,
        surface: &mut impl RenderSurface,
        max_frames: usize,
    ) -> usize {
        let mut frames = 0;
        while self.running && frames < max_frames && !input.is_finished() {
            input.advance();
            self.frame(&*input, surface);
            frames += 1;
        }
        frames
    }
}
