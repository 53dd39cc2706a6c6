//! Dirt scattering — bounded rejection sampling away from walls.

use rand::Rng;

use crate::components::{Rect, RoomConfig, Vec2};
use crate::params::dirt::{MAX_PLACEMENT_ATTEMPTS, RADIUS};

/// Scatter up to `config.dirt_count` particles uniformly over the room,
/// inset by the particle radius, rejecting candidates whose bounding square
/// overlaps a wall.
///
/// Sampling per particle is capped at [`MAX_PLACEMENT_ATTEMPTS`]; a
/// particle that exhausts its attempts is skipped, so the function always
/// terminates and may return fewer particles than requested when most of
/// the floor is walled off.
pub fn scatter_dirt(config: &RoomConfig, walls: &[Rect], rng: &mut impl Rng) -> Vec<Vec2> {
    let mut particles = Vec::with_capacity(config.dirt_count);

    for _ in 0..config.dirt_count {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = Vec2::new(
                rng.gen_range(RADIUS..=config.width - RADIUS),
                rng.gen_range(RADIUS..=config.height - RADIUS),
            );
            let footprint = Rect::around(candidate, RADIUS);
            if !walls.iter().any(|wall| footprint.intersects(wall)) {
                particles.push(candidate);
                break;
            }
        }
    }

    particles
}
