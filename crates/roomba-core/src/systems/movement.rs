//! Movement system — candidate position from held directions, whole-move
//! rejection on wall collision.
//!
//! Each held direction contributes the fixed per-axis speed; diagonal input
//! is the raw vector sum, so diagonal travel is faster than axial. Opposite
//! directions cancel to zero displacement but still count as a step.

use crate::components::{Agent, FrameInput, Rect, Vec2};

/// Displacement produced by one tick of the given input.
pub fn direction_delta(input: &FrameInput, speed: f32) -> Vec2 {
    let mut delta = Vec2::ZERO;
    if input.left {
        delta.x -= speed;
    }
    if input.right {
        delta.x += speed;
    }
    if input.up {
        delta.y -= speed;
    }
    if input.down {
        delta.y += speed;
    }
    delta
}

/// True if `bbox` overlaps any wall.
pub fn collides_with_walls(bbox: &Rect, walls: &[Rect]) -> bool {
    walls.iter().any(|wall| bbox.intersects(wall))
}

/// Attempt one movement tick. The whole candidate move is rejected — the
/// position stays unchanged — when the agent's bounding box at the candidate
/// would overlap a wall. An accepted move increments the step counter by
/// exactly 1 however many directions were combined. No-ops with a dead
/// battery or with no direction held.
pub fn apply_movement(agent: &mut Agent, input: &FrameInput, walls: &[Rect]) {
    if agent.battery == 0 || !input.any_direction() {
        return;
    }

    let candidate = agent.pos + direction_delta(input, agent.speed);
    if !collides_with_walls(&agent.bounding_box_at(candidate), walls) {
        agent.pos = candidate;
        agent.steps_taken += 1;
    }
}
