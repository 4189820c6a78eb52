pub mod failure;
pub mod resources;

pub use failure::*;
pub use resources::*;
