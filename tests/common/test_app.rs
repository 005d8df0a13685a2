use std::time::Duration;

use arcade_flight::{
    components::{Attachment, PlayerController},
    config::{AircraftConfig, PhysicsConfig, RespawnConfig},
    plugins::{spawn_aircraft, EnvironmentPlugin, FlightPlugin, PhysicsPlugin},
    resources::EnvironmentConfig,
};
use bevy::{ecs::world::CommandQueue, prelude::*, time::TimeUpdateStrategy};

const PARKED_FIXED_PERIOD: Duration = Duration::from_secs(3600);

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    aircraft_configs: Vec<(AircraftConfig, bool)>,
    physics_config: Option<PhysicsConfig>,
    environment_config: Option<EnvironmentConfig>,
    respawn_config: Option<RespawnConfig>,
    fixed_timestep: Option<f64>,
    frame_time: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            aircraft_configs: Vec::new(),
            physics_config: None,
            environment_config: None,
            respawn_config: None,
            fixed_timestep: None,
            frame_time: 0.02,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an aircraft flown by `PilotInput`.
    pub fn with_aircraft(mut self, config: AircraftConfig) -> Self {
        self.aircraft_configs.push((config, true));
        self
    }

    /// Add an aircraft nobody flies.
    pub fn with_unpiloted_aircraft(mut self, config: AircraftConfig) -> Self {
        self.aircraft_configs.push((config, false));
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    pub fn with_environment(mut self, config: EnvironmentConfig) -> Self {
        self.environment_config = Some(config);
        self
    }

    pub fn with_respawn(mut self, config: RespawnConfig) -> Self {
        self.respawn_config = Some(config);
        self
    }

    /// Host fixed clock period, overriding the one `PhysicsPlugin` derives
    /// from the physics config.
    pub fn with_fixed_timestep(mut self, seconds: f64) -> Self {
        self.fixed_timestep = Some(seconds);
        self
    }

    pub fn with_frame_time(mut self, seconds: f64) -> Self {
        self.frame_time = seconds;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        let physics_config = self.physics_config.unwrap_or_default();
        let fixed_timestep = self.fixed_timestep.unwrap_or(physics_config.timestep);

        app.add_plugins(MinimalPlugins)
            .add_plugins(PhysicsPlugin::with_config(physics_config))
            .add_plugins(EnvironmentPlugin::with_config(
                self.environment_config.unwrap_or_default(),
            ))
            .add_plugins(
                FlightPlugin::default().with_respawn(self.respawn_config.unwrap_or_default()),
            );

        // Frames advance by a fixed amount. The fixed clock stays parked between
        // frames so ticks only run through `run_fixed_tick`.
        app.insert_resource(TimeUpdateStrategy::ManualDuration(
            Duration::from_secs_f64(self.frame_time),
        ))
        .insert_resource(Time::<Fixed>::from_duration(PARKED_FIXED_PERIOD));

        let mut bodies = Vec::new();
        let mut queue = CommandQueue::default();
        {
            let mut commands = Commands::new(&mut queue, app.world());
            for (config, piloted) in &self.aircraft_configs {
                let body = spawn_aircraft(&mut commands, config);
                if *piloted {
                    commands.entity(body).insert(PlayerController::new());
                }
                bodies.push(body);
            }
        }
        queue.apply(app.world_mut());

        // Run an initial update to initialize everything
        app.update();

        TestApp {
            app,
            bodies,
            fixed_timestep: Duration::from_secs_f64(fixed_timestep),
        }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    /// Aircraft bodies in the order they were added
    pub bodies: Vec<Entity>,
    fixed_timestep: Duration,
}

impl TestApp {
    pub fn body(&self) -> Entity {
        self.bodies[0]
    }

    /// One variable-rate frame: pilot input, actuators, respawn and telemetry.
    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.run_frame();
        }
    }

    /// One fixed physics tick, with the fixed clock set to the host period.
    pub fn run_fixed_tick(&mut self) {
        let world = self.app.world_mut();
        world
            .resource_mut::<Time<Fixed>>()
            .set_timestep(self.fixed_timestep);
        world.run_schedule(FixedUpdate);
        world
            .resource_mut::<Time<Fixed>>()
            .set_timestep(PARKED_FIXED_PERIOD);
    }

    pub fn run_fixed_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.run_fixed_tick();
        }
    }

    pub fn get<T: Component>(&self, entity: Entity) -> &T {
        self.app
            .world()
            .get::<T>(entity)
            .unwrap_or_else(|| panic!("{entity:?} has no {}", std::any::type_name::<T>()))
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Mut<T> {
        self.app
            .world_mut()
            .get_mut::<T>(entity)
            .unwrap_or_else(|| panic!("{entity:?} has no {}", std::any::type_name::<T>()))
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn resource_mut<T: Resource>(&mut self) -> Mut<T> {
        self.app.world_mut().resource_mut::<T>()
    }

    pub fn send_event<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    /// Surface or thruster of `body` spawned under `name`.
    pub fn part(&mut self, body: Entity, name: &str) -> Entity {
        let world = self.app.world_mut();
        let mut query = world.query::<(Entity, &Name, &Attachment)>();
        query
            .iter(world)
            .find(|(_, part_name, attachment)| {
                part_name.as_str() == name && attachment.body == Some(body)
            })
            .map(|(entity, _, _)| entity)
            .unwrap_or_else(|| panic!("{body:?} has no part named {name}"))
    }

    pub fn parts(&mut self, body: Entity) -> Vec<Entity> {
        let world = self.app.world_mut();
        let mut query = world.query::<(Entity, &Attachment)>();
        query
            .iter(world)
            .filter(|(_, attachment)| attachment.body == Some(body))
            .map(|(entity, _)| entity)
            .collect()
    }
}
