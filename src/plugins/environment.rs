use bevy::prelude::*;

use crate::resources::{EnvironmentConfig, Meteorology};

pub struct EnvironmentPlugin {
    pub config: Option<EnvironmentConfig>,
}

impl Default for EnvironmentPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentPlugin {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(config: EnvironmentConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone().unwrap_or_default();
        info!(
            "Meteorology: wind {:?} m/s, air density {}",
            config.wind_velocity, config.air_density
        );
        app.insert_resource(Meteorology::new(&config))
            .insert_resource(config);
    }
}
