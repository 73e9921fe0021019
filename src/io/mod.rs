//! Collaborator seams for the landing environment
//!
//! The environment core is a pure in-memory state machine between these
//! trait calls: a pose/telemetry source, a flight actuation sink, and a
//! world-mutation hook for applying spawn poses. Transport bindings live
//! behind these traits and are not part of the core.

use anyhow::Result;

use crate::geometry::pose::{Pose, Twist};

pub mod sim;

/// Latest-value pose and status telemetry from the platform.
///
/// Returning `None` means no data arrived for the current tick; the
/// environment treats that as a recoverable gap, not a failure.
pub trait TelemetrySource {
    /// Latest vehicle world pose, if any was reported this tick.
    fn vehicle_pose(&self) -> Option<Pose>;

    /// Latest landing-target world pose, if any was reported this tick.
    fn target_pose(&self) -> Option<Pose>;

    /// Platform-reported touchdown flag.
    fn landed_signal(&self) -> bool;

    /// Whether altitude telemetry can be trusted this tick.
    fn altitude_valid(&self) -> bool {
        true
    }
}

/// Flight actuation sink; receives at most one command per tick.
pub trait FlightActuator {
    /// Send a velocity setpoint.
    fn dispatch_velocity(&mut self, twist: Twist) -> Result<()>;

    /// Request a platform takeoff.
    fn dispatch_takeoff(&mut self) -> Result<()>;

    /// Request a platform landing.
    fn dispatch_land(&mut self) -> Result<()>;
}

/// World-mutation hook used when a reset is consumed.
pub trait WorldControl {
    /// Teleport the vehicle to a freshly sampled spawn pose.
    fn apply_spawn_pose(&mut self, pose: Pose) -> Result<()>;
}

/// A collaborator offering all three seams at once, as a real platform
/// binding or the in-process simulator does.
pub trait World: TelemetrySource + FlightActuator + WorldControl {}

impl<T: TelemetrySource + FlightActuator + WorldControl> World for T {}
