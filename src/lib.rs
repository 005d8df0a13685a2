pub mod components;
pub mod config;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
