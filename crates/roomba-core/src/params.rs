//! Simulation tuning constants — agent, battery, dirt, layout, scoring.
//!
//! These are plain constants with no engine dependency. Both the Bevy
//! viewer and the headless harness read the same values.

pub mod room {
    /// Default window/room width in pixels.
    pub const DEFAULT_WIDTH: f32 = 800.0;
    /// Default window/room height in pixels.
    pub const DEFAULT_HEIGHT: f32 = 600.0;
    /// Thickness of the boundary and interior walls.
    pub const WALL_THICKNESS: f32 = 20.0;
}

pub mod agent {
    /// Collision radius of the vacuum body.
    pub const RADIUS: f32 = 20.0;
    /// Per-axis displacement applied for each held direction, per tick.
    pub const SPEED: f32 = 5.0;
}

pub mod battery {
    /// Battery level at simulation start.
    pub const INITIAL_LEVEL: u8 = 100;
    /// Accepted movement steps before one depletion event fires.
    pub const STEPS_PER_DECREASE: u32 = 100;
    /// Battery percentage lost per depletion event.
    pub const DECREASE_AMOUNT: u8 = 5;
    /// Battery percentage gained per charge tick.
    pub const CHARGE_AMOUNT: u8 = 2;
    /// Minimum dwell between charge ticks, in simulation seconds.
    pub const CHARGE_INTERVAL_SECS: f64 = 5.0;
}

pub mod station {
    /// Charging station center X.
    pub const CENTER_X: f32 = 50.0;
    /// Charging station center Y.
    pub const CENTER_Y: f32 = 50.0;
    /// Side length of the square station footprint.
    pub const SIZE: f32 = 40.0;
}

pub mod dirt {
    /// Visual and collision radius of one dirt particle.
    pub const RADIUS: f32 = 3.0;
    /// Default number of particles scattered at startup.
    pub const DEFAULT_COUNT: usize = 100;
    /// Rejection-sampling cap per particle; exhausted particles are skipped
    /// so scattering always terminates in densely walled rooms.
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1_000;
}

pub mod scoring {
    /// Points awarded per dirt particle cleaned.
    pub const POINTS_PER_DIRT: u32 = 10;
}
