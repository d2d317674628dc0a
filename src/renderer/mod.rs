//! Rendering module
//!
//! The simulation only sees `RenderSurface`: draw a fixed quad at an
//! offset, then present. `QuadRenderer` is the WebGPU implementation.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::QuadRenderer;

use glam::Vec2;

use crate::error::Result;

/// The three quads the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectId {
    LeftPaddle,
    RightPaddle,
    Ball,
}

impl ObjectId {
    pub const ALL: [ObjectId; 3] = [ObjectId::LeftPaddle, ObjectId::RightPaddle, ObjectId::Ball];
}

/// Something that can draw the game's quads
pub trait RenderSurface {
    /// Queue `object` translated by `offset` (paddles only use `offset.y`)
    fn draw(&mut self, object: ObjectId, offset: Vec2);

    /// Show everything drawn since the last present
    fn present(&mut self) -> Result<()>;
}

/// Surface that records draws instead of rendering; for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pending: Vec<(ObjectId, Vec2)>,
    frames: Vec<Vec<(ObjectId, Vec2)>>,
}

impl RecordingSurface {
    /// Draws issued since the last present
    pub fn pending(&self) -> &[(ObjectId, Vec2)] {
        &self.pending
    }

    /// Presented frames, oldest first
    pub fn frames(&self) -> &[Vec<(ObjectId, Vec2)>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[(ObjectId, Vec2)]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl RenderSurface for RecordingSurface {
    fn draw(&mut self, object: ObjectId, offset: Vec2) {
        log::trace!("draw {:?} at {:?}", object, offset);
        self.pending.push((object, offset));
    }

    fn present(&mut self) -> Result<()> {
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}
