//! Cleaning system — remove dirt under the agent, award points.
//!
//! Runs every tick the trigger is held. There is no per-particle cooldown:
//! dirt already inside the bounding box is collected on the first
//! qualifying tick.

use crate::components::{Agent, Vec2};
use crate::params::scoring;

/// Remove every dirt particle whose center lies inside the agent's bounding
/// box and add the per-particle reward to `score`. No-op with a dead
/// battery. Returns the number of particles removed.
pub fn clean_dirt(agent: &Agent, dirt: &mut Vec<Vec2>, score: &mut u32) -> usize {
    if agent.battery == 0 {
        return 0;
    }

    let bbox = agent.bounding_box();
    let before = dirt.len();
    dirt.retain(|particle| !bbox.contains_point(*particle));

    let removed = before - dirt.len();
    *score += removed as u32 * scoring::POINTS_PER_DIRT;
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleans_particles_under_agent() {
        let agent = Agent::new(Vec2::new(100.0, 100.0));
        let mut dirt = vec![
            Vec2::new(100.0, 100.0),
            Vec2::new(110.0, 95.0),
            Vec2::new(85.0, 105.0),
            Vec2::new(300.0, 300.0),
        ];
        let mut score = 0;

        let removed = clean_dirt(&agent, &mut dirt, &mut score);
        assert_eq!(removed, 3);
        assert_eq!(dirt.len(), 1);
        assert_eq!(score, 30);
    }

    #[test]
    fn test_nothing_under_agent() {
        let agent = Agent::new(Vec2::new(100.0, 100.0));
        let mut dirt = vec![Vec2::new(300.0, 300.0)];
        let mut score = 0;

        let removed = clean_dirt(&agent, &mut dirt, &mut score);
        assert_eq!(removed, 0);
        assert_eq!(dirt.len(), 1);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_dead_battery_is_noop() {
        let mut agent = Agent::new(Vec2::new(100.0, 100.0));
        agent.battery = 0;
        let mut dirt = vec![Vec2::new(100.0, 100.0)];
        let mut score = 0;

        let removed = clean_dirt(&agent, &mut dirt, &mut score);
        assert_eq!(removed, 0);
        assert_eq!(dirt.len(), 1);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_second_pass_finds_nothing() {
        let agent = Agent::new(Vec2::new(100.0, 100.0));
        let mut dirt = vec![Vec2::new(100.0, 100.0)];
        let mut score = 0;

        assert_eq!(clean_dirt(&agent, &mut dirt, &mut score), 1);
        assert_eq!(clean_dirt(&agent, &mut dirt, &mut score), 0);
        assert_eq!(score, 10);
    }

    #[test]
    fn test_particle_on_box_edge_is_outside() {
        let agent = Agent::new(Vec2::new(100.0, 100.0));
        // Bounding box spans [80, 120); a particle exactly on the right
        // edge is not collected.
        let mut dirt = vec![Vec2::new(120.0, 100.0)];
        let mut score = 0;

        assert_eq!(clean_dirt(&agent, &mut dirt, &mut score), 0);
        assert_eq!(dirt.len(), 1);
    }
}
