//! Generation - room layout and dirt scattering at startup

mod dirt;
mod layout;

pub use dirt::*;
pub use layout::*;
