use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Mass properties plus the forces pushed into a body during the current tick.
///
/// `forces` doubles as the debug trace: it is only cleared at the start of the
/// next tick, so after a tick it holds everything that was applied.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    pub inertia: Matrix3<f64>,
    pub inertia_inv: Matrix3<f64>,
    /// Net force in world frame [N]
    pub net_force: Vector3<f64>,
    /// Net moment in body frame [N·m]
    pub net_moment: Vector3<f64>,
    pub forces: Vec<Force>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    /// Application point in world space. `None` acts through the centre of mass.
    pub point: Option<Vector3<f64>>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
    pub mode: ForceMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
}

/// How a force vector is turned into motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ForceMode {
    /// Continuous force [N]
    #[default]
    Force,
    /// Continuous acceleration, ignores mass [m/s²]
    Acceleration,
    /// Instant impulse [N·s]
    Impulse,
    /// Instant velocity change, ignores mass [m/s]
    VelocityChange,
}

impl ForceMode {
    /// Scale that turns a vector applied in this mode into the continuous force
    /// producing the same effect over one tick of `dt` seconds.
    pub fn equivalent_force_scale(&self, mass: f64, dt: f64) -> f64 {
        match self {
            ForceMode::Force => 1.0,
            ForceMode::Acceleration => mass,
            ForceMode::Impulse => {
                if dt > 0.0 {
                    1.0 / dt
                } else {
                    0.0
                }
            }
            ForceMode::VelocityChange => {
                if dt > 0.0 {
                    mass / dt
                } else {
                    0.0
                }
            }
        }
    }
}

impl PhysicsComponent {
    pub fn new(mass: f64, inertia: Matrix3<f64>) -> Self {
        let inertia_inv = inertia.try_inverse().unwrap_or(Matrix3::identity());
        Self {
            mass,
            inertia,
            inertia_inv,
            net_force: Vector3::zeros(),
            net_moment: Vector3::zeros(),
            forces: Vec::new(),
        }
    }

    /// Diagonal inertia tensor from principal moments.
    pub fn with_principal_inertia(mass: f64, principal: Vector3<f64>) -> Self {
        Self::new(mass, Matrix3::from_diagonal(&principal))
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
        self.net_force = Vector3::zeros();
        self.net_moment = Vector3::zeros();
    }

    /// Forces of one category applied this tick.
    pub fn forces_of(&self, category: ForceCategory) -> impl Iterator<Item = &Force> {
        self.forces
            .iter()
            .filter(move |force| force.category == category)
    }
}
