mod environment;
mod input;

pub use environment::{EnvironmentConfig, Meteorology};
pub use input::PilotInput;
