//! Roomba Core - Room Cleaning Simulation Engine
//!
//! A keyboard-driven 2D simulation of a robotic vacuum in a walled room:
//! axis-aligned collision against static walls, dirt pickup with a score
//! counter, and a battery that drains with movement and recharges at a
//! charging station.
//!
//! # Architecture
//!
//! The entire model is a single explicit state struct updated by pure
//! functions:
//! - **Components**: plain data (`Agent`, `Rect` walls, dirt points,
//!   `ChargingStation`)
//! - **Systems**: per-tick update logic (movement, cleaning, battery)
//! - **Generation**: wall layout and dirt scattering at startup
//!
//! No rendering, windowing, or I/O dependency — everything here runs
//! headless.
//!
//! # Example
//!
//! ```rust,no_run
//! use roomba_core::prelude::*;
//!
//! let mut sim = Simulation::new(RoomConfig::default());
//!
//! // Run simulation
//! loop {
//!     let input = FrameInput { right: true, ..FrameInput::default() };
//!     sim.update(&input, 1.0 / 60.0); // 60 FPS
//! }
//! ```

pub mod components;
pub mod engine;
pub mod generation;
pub mod params;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::Simulation;
}
