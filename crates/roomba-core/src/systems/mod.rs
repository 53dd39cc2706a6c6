//! Systems - per-tick update logic over the simulation state

mod battery;
mod cleaning;
mod movement;

pub use battery::*;
pub use cleaning::*;
pub use movement::*;
