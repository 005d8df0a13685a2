pub mod constants;
pub mod math;

pub use constants::*;
pub use math::*;
