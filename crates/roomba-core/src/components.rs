//! Model types for the simulation.
//!
//! These are pure data structs with no behavior beyond simple geometry
//! helpers — all update logic lives in systems.

use serde::{Deserialize, Serialize};

use crate::params;

/// 2D position vector. Room coordinates: top-left origin, y grows downward.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Axis-aligned rectangle: top-left corner plus extents.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square rect centered on `center` with the given half-extent.
    pub fn around(center: Vec2, half: f32) -> Self {
        Self {
            x: center.x - half,
            y: center.y - half,
            width: half * 2.0,
            height: half * 2.0,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict AABB overlap — rectangles that only share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Point containment with half-open edges: left/top inclusive,
    /// right/bottom exclusive.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// The vacuum agent. Created once at simulation start, never destroyed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Agent {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Battery percentage, always within 0–100.
    pub battery: u8,
    /// Accepted movement steps since the last battery decrement.
    pub steps_taken: u32,
}

impl Agent {
    /// New agent at `pos` with full battery and default body parameters.
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: params::agent::RADIUS,
            speed: params::agent::SPEED,
            battery: params::battery::INITIAL_LEVEL,
            steps_taken: 0,
        }
    }

    /// Collision box derived from the current position and body radius.
    pub fn bounding_box(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }

    /// Bounding box the agent would occupy at `pos`.
    pub fn bounding_box_at(&self, pos: Vec2) -> Rect {
        Rect::around(pos, self.radius)
    }
}

/// Fixed square charging zone. Stateless beyond position and size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChargingStation {
    pub center: Vec2,
    pub size: f32,
}

impl ChargingStation {
    pub fn new(center: Vec2, size: f32) -> Self {
        Self { center, size }
    }

    /// True when a body at `pos` with the given radius is close enough to
    /// draw charge.
    pub fn in_range(&self, pos: Vec2, radius: f32) -> bool {
        pos.distance(&self.center) < radius + self.size / 2.0
    }

    /// Footprint rectangle, for rendering and layout checks.
    pub fn footprint(&self) -> Rect {
        Rect::around(self.center, self.size / 2.0)
    }
}

/// Startup parameters. The only externally configurable values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoomConfig {
    pub width: f32,
    pub height: f32,
    pub dirt_count: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: params::room::DEFAULT_WIDTH,
            height: params::room::DEFAULT_HEIGHT,
            dirt_count: params::dirt::DEFAULT_COUNT,
        }
    }
}

/// Instantaneous keyboard state for one tick. Directions combine freely;
/// opposite directions cancel arithmetically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub clean: bool,
}

impl FrameInput {
    /// True if any directional key is held.
    pub fn any_direction(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}
