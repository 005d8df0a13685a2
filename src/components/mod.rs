pub mod attachment;
pub mod body;
pub mod control;
pub mod controller;
pub mod physics;
pub mod spatial;
pub mod surface;
pub mod telemetry;
pub mod thruster;

pub use attachment::{Attachment, WorldPose};
pub use body::{AerodynamicBody, AssistedLift};
pub use control::{
    AileronConfig, ControlChannel, ControlSurfaceBinding, ControlSurfaces, Deflections,
    ElevatorConfig, FlapConfig, RudderConfig, Side, Smoothing, SurfacePair,
};
pub use controller::PlayerController;
pub use physics::{Force, ForceCategory, ForceMode, PhysicsComponent, ReferenceFrame};
pub use spatial::SpatialComponent;
pub use surface::{AerodynamicSurface, AxisClamp};
pub use telemetry::FlightTelemetry;
pub use thruster::Thruster;
