//! Quad geometry for the paddles and the ball
//!
//! Paddle x placement is baked into the geometry from the collision
//! planes; only offsets change per frame.

use glam::Vec2;

use super::ObjectId;
use super::vertex::{Vertex, colors};
use crate::consts::BALL_SIZE;
use crate::tuning::Tuning;

/// Two triangles over corners ordered top-right, bottom-right, bottom-left, top-left
pub const QUAD_INDICES: [usize; 6] = [0, 1, 3, 1, 2, 3];

/// Vertices emitted per quad
pub const VERTICES_PER_QUAD: usize = QUAD_INDICES.len();

/// Untranslated quad corners for one object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [Vec2; 4],
    pub color: [f32; 4],
}

impl Quad {
    fn from_edges(left: f32, right: f32, bottom: f32, top: f32, color: [f32; 4]) -> Self {
        Self {
            corners: [
                Vec2::new(right, top),
                Vec2::new(right, bottom),
                Vec2::new(left, bottom),
                Vec2::new(left, top),
            ],
            color,
        }
    }

    /// Triangle list vertices translated by `offset`
    pub fn vertices(&self, offset: Vec2) -> [Vertex; VERTICES_PER_QUAD] {
        QUAD_INDICES.map(|i| {
            let p = self.corners[i] + offset;
            Vertex::new(p.x, p.y, self.color)
        })
    }
}

/// Static geometry for all three objects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSet {
    pub left_paddle: Quad,
    pub right_paddle: Quad,
    pub ball: Quad,
}

impl QuadSet {
    pub fn new(tuning: &Tuning) -> Self {
        let half = tuning.half_paddle_height;
        let width = tuning.paddle_width;
        let left_x = tuning.left_collision_x;
        let right_x = tuning.right_collision_x;

        Self {
            // Inner face sits on the collision plane
            left_paddle: Quad::from_edges(left_x - width, left_x, -half, half, colors::PADDLE),
            right_paddle: Quad::from_edges(right_x, right_x + width, -half, half, colors::PADDLE),
            ball: Quad::from_edges(0.0, BALL_SIZE, -BALL_SIZE, BALL_SIZE, colors::BALL),
        }
    }

    pub fn get(&self, object: ObjectId) -> &Quad {
        match object {
            ObjectId::LeftPaddle => &self.left_paddle,
            ObjectId::RightPaddle => &self.right_paddle,
            ObjectId::Ball => &self.ball,
        }
    }
}
