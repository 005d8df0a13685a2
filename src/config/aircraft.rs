use std::collections::HashSet;
use std::path::Path;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{
    AerodynamicBody, AssistedLift, AxisClamp, ControlChannel, ControlSurfaces, Side,
};
use crate::config::loader::{ensure, load_yaml_file, load_yaml_str, ConfigError};

/// The full aircraft definition: mass, body parameters, actuators and every
/// attached surface and thruster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub name: String,
    /// Total mass [kg]
    pub mass: f64,
    /// Principal moments of inertia about body X, Y, Z [kg·m²]
    pub inertia: Vector3<f64>,
    #[serde(default)]
    pub body: AerodynamicBody,
    #[serde(default)]
    pub assisted_lift: Option<AssistedLift>,
    #[serde(default)]
    pub controls: ControlSurfaces,
    #[serde(default)]
    pub surfaces: Vec<SurfaceConfig>,
    #[serde(default)]
    pub thrusters: Vec<ThrusterConfig>,
    #[serde(default)]
    pub start: StartConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub name: String,
    /// [m²]
    pub area: f64,
    #[serde(default = "default_multiplier")]
    pub force_multiplier: f64,
    #[serde(default)]
    pub clamp_axes: AxisClamp,
    /// Mount offset from the centre of mass, body frame [m]
    pub offset: Vector3<f64>,
    /// Mount Euler angles (pitch X, yaw Y, roll Z) [deg]
    #[serde(default = "default_orientation")]
    pub orientation: Vector3<f64>,
    #[serde(default)]
    pub control: Option<ControlBindingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlBindingConfig {
    pub channel: ControlChannel,
    pub side: Side,
    #[serde(default = "default_hinge_axis")]
    pub hinge_axis: Vector3<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrusterConfig {
    pub name: String,
    pub offset: Vector3<f64>,
    #[serde(default = "default_orientation")]
    pub orientation: Vector3<f64>,
    /// Acceleration at full power [m/s²]
    pub thrust_force: f64,
    /// [deg]
    pub max_vector_angle: f64,
    /// [deg]
    pub max_opening_angle: f64,
    #[serde(default = "default_emission_rate")]
    pub max_emission_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartConfig {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    /// Heading from `+Z` towards `+X` [deg]
    #[serde(default)]
    pub heading: f64,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            heading: 0.0,
        }
    }
}

fn default_multiplier() -> f64 {
    1.0
}

fn default_emission_rate() -> f64 {
    100.0
}

fn default_orientation() -> Vector3<f64> {
    Vector3::zeros()
}

fn default_hinge_axis() -> Vector3<f64> {
    Vector3::x()
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self::arcade_jet()
    }
}

impl AircraftConfig {
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = load_yaml_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: Self = load_yaml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure("mass", self.mass, |m| m > 0.0, "positive")?;
        for (axis, value) in ["x", "y", "z"].iter().zip(self.inertia.iter()) {
            ensure(&format!("inertia.{axis}"), *value, |i| i > 0.0, "positive")?;
        }

        ensure(
            "body.default_force",
            self.body.default_force,
            |f| f >= 0.0,
            "non-negative",
        )?;
        ensure(
            "body.reference_speed",
            self.body.reference_speed,
            |s| s > 0.0,
            "positive",
        )?;
        if let Some(lift) = &self.assisted_lift {
            ensure("assisted_lift.lift_force", lift.lift_force, |_| true, "finite")?;
        }

        let controls = &self.controls;
        ensure("controls.flaps.max_deflection", controls.flaps.max_deflection, |_| true, "finite")?;
        ensure(
            "controls.flaps.brake_extra_deflection",
            controls.flaps.brake_extra_deflection,
            |_| true,
            "finite",
        )?;
        ensure("controls.ailerons.max_deflection", controls.ailerons.max_deflection, |_| true, "finite")?;
        ensure("controls.elevators.max_deflection", controls.elevators.max_deflection, |_| true, "finite")?;
        ensure(
            "controls.elevators.turn_extra_deflection",
            controls.elevators.turn_extra_deflection,
            |_| true,
            "finite",
        )?;
        ensure("controls.rudders.max_deflection", controls.rudders.max_deflection, |_| true, "finite")?;
        ensure(
            "controls.rudders.outer_rudder_ratio",
            controls.rudders.outer_rudder_ratio,
            |r| (0.0..=1.0).contains(&r),
            "within [0, 1]",
        )?;
        ensure("controls.smoothing.rate", controls.smoothing.rate, |_| true, "finite")?;

        let mut names = HashSet::new();
        for surface in &self.surfaces {
            if !names.insert(surface.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate part name '{}'",
                    surface.name
                )));
            }
            surface.validate()?;
        }
        for thruster in &self.thrusters {
            if !names.insert(thruster.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate part name '{}'",
                    thruster.name
                )));
            }
            thruster.validate()?;
        }

        Ok(())
    }

    /// A small vectored-thrust jet with a full set of control surfaces.
    pub fn arcade_jet() -> Self {
        // Horizontal panels face up, vertical panels face right
        let horizontal = Vector3::new(-90.0, 0.0, 0.0);
        let vertical = Vector3::new(0.0, 90.0, 0.0);

        let panel = |name: &str, area: f64, offset: Vector3<f64>, orientation: Vector3<f64>| {
            SurfaceConfig {
                name: name.to_string(),
                area,
                force_multiplier: 1.0,
                clamp_axes: AxisClamp::NONE,
                offset,
                orientation,
                control: None,
            }
        };
        let control = |channel: ControlChannel, side: Side, hinge_axis: Vector3<f64>| {
            Some(ControlBindingConfig {
                channel,
                side,
                hinge_axis,
            })
        };

        let mut surfaces = vec![
            panel("wing_left", 10.0, Vector3::new(-3.0, 0.0, 0.0), horizontal),
            panel("wing_right", 10.0, Vector3::new(3.0, 0.0, 0.0), horizontal),
            SurfaceConfig {
                clamp_axes: AxisClamp {
                    x: false,
                    y: true,
                    z: true,
                },
                ..panel("fuselage", 6.0, Vector3::zeros(), vertical)
            },
        ];
        for (side, sign) in [(Side::Left, -1.0), (Side::Right, 1.0)] {
            let suffix = match side {
                Side::Left => "left",
                Side::Right => "right",
            };
            surfaces.push(SurfaceConfig {
                control: control(ControlChannel::Flap, side, Vector3::x()),
                ..panel(
                    &format!("flap_{suffix}"),
                    1.5,
                    Vector3::new(sign * 2.0, 0.0, -1.2),
                    horizontal,
                )
            });
            surfaces.push(SurfaceConfig {
                control: control(ControlChannel::Aileron, side, Vector3::x()),
                ..panel(
                    &format!("aileron_{suffix}"),
                    1.0,
                    Vector3::new(sign * 5.0, 0.0, -1.0),
                    horizontal,
                )
            });
            surfaces.push(SurfaceConfig {
                control: control(ControlChannel::Elevator, side, Vector3::x()),
                ..panel(
                    &format!("elevator_{suffix}"),
                    1.5,
                    Vector3::new(sign * 1.5, 0.0, -6.0),
                    horizontal,
                )
            });
            surfaces.push(SurfaceConfig {
                control: control(ControlChannel::Rudder, side, Vector3::y()),
                ..panel(
                    &format!("rudder_{suffix}"),
                    1.2,
                    Vector3::new(sign * 1.0, 1.5, -6.0),
                    vertical,
                )
            });
        }

        Self {
            name: "ArcadeJet".to_string(),
            mass: 1000.0,
            inertia: Vector3::new(3000.0, 4000.0, 1500.0),
            body: AerodynamicBody::new(0.05, 40.0),
            assisted_lift: Some(AssistedLift { lift_force: 9.0 }),
            controls: ControlSurfaces::default(),
            surfaces,
            thrusters: vec![ThrusterConfig {
                name: "main_engine".to_string(),
                offset: Vector3::new(0.0, 0.0, -7.0),
                orientation: Vector3::zeros(),
                thrust_force: 30.0,
                max_vector_angle: 10.0,
                max_opening_angle: 20.0,
                max_emission_rate: 100.0,
            }],
            start: StartConfig {
                position: Vector3::new(0.0, 200.0, 0.0),
                velocity: Vector3::new(0.0, 0.0, 40.0),
                heading: 0.0,
            },
        }
    }
}

impl SurfaceConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        ensure(&format!("{}.area", self.name), self.area, |a| a >= 0.0, "non-negative")?;
        ensure(
            &format!("{}.force_multiplier", self.name),
            self.force_multiplier,
            |_| true,
            "finite",
        )?;
        if let Some(control) = &self.control {
            if control.hinge_axis.norm() < f64::EPSILON {
                return Err(ConfigError::ValidationError(format!(
                    "{}.control.hinge_axis must be non-zero",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

impl ThrusterConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        ensure(
            &format!("{}.thrust_force", self.name),
            self.thrust_force,
            |f| f >= 0.0,
            "non-negative",
        )?;
        ensure(
            &format!("{}.max_vector_angle", self.name),
            self.max_vector_angle,
            |_| true,
            "finite",
        )?;
        ensure(
            &format!("{}.max_opening_angle", self.name),
            self.max_opening_angle,
            |_| true,
            "finite",
        )?;
        ensure(
            &format!("{}.max_emission_rate", self.name),
            self.max_emission_rate,
            |r| r >= 0.0,
            "non-negative",
        )
    }
}
