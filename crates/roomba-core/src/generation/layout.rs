//! Wall layout — four boundary walls plus fixed interior obstacles.
//!
//! The boundary walls size themselves from the room config. The interior
//! obstacles sit at hardcoded coordinates and do not scale with the room;
//! rooms smaller than the default clip them.

use crate::components::{Rect, RoomConfig};
use crate::params::room::WALL_THICKNESS;

/// Build the immutable wall set for a room.
pub fn generate_walls(config: &RoomConfig) -> Vec<Rect> {
    let t = WALL_THICKNESS;

    let mut walls = vec![
        Rect::new(0.0, 0.0, config.width, t),                 // top
        Rect::new(0.0, config.height - t, config.width, t),   // bottom
        Rect::new(0.0, 0.0, t, config.height),                // left
        Rect::new(config.width - t, 0.0, t, config.height),   // right
    ];

    // Interior obstacles
    walls.extend([
        Rect::new(200.0, 150.0, t, 300.0),
        Rect::new(400.0, 200.0, 200.0, t),
        Rect::new(600.0, 400.0, t, 200.0),
    ]);

    walls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_has_seven_walls() {
        let walls = generate_walls(&RoomConfig::default());
        assert_eq!(walls.len(), 7);
    }

    #[test]
    fn test_boundary_walls_frame_the_room() {
        let config = RoomConfig::default();
        let walls = generate_walls(&config);

        let top = walls[0];
        assert_eq!((top.x, top.y), (0.0, 0.0));
        assert_eq!(top.width, config.width);

        let bottom = walls[1];
        assert_eq!(bottom.bottom(), config.height);

        let left = walls[2];
        assert_eq!(left.height, config.height);

        let right = walls[3];
        assert_eq!(right.right(), config.width);
    }

    #[test]
    fn test_boundary_scales_with_config() {
        let config = RoomConfig {
            width: 1024.0,
            height: 768.0,
            dirt_count: 0,
        };
        let walls = generate_walls(&config);
        assert_eq!(walls[1].y, 768.0 - WALL_THICKNESS);
        assert_eq!(walls[3].x, 1024.0 - WALL_THICKNESS);
    }

    #[test]
    fn test_interior_obstacles_are_fixed() {
        let small = generate_walls(&RoomConfig {
            width: 400.0,
            height: 300.0,
            dirt_count: 0,
        });
        let large = generate_walls(&RoomConfig::default());
        assert_eq!(small[4], large[4]);
        assert_eq!(small[5], large[5]);
        assert_eq!(small[6], large[6]);
    }
}
