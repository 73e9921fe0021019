//! In-process kinematic world
//!
//! [`SimWorld`] stands in for the real platform during tests and demos:
//! it integrates velocity commands at the tick rate, honors takeoff/land
//! and spawn-pose requests, and reports poses back as a telemetry source.
//! Dynamics are deliberately simple; the vehicle is a point following its
//! commanded twist exactly.

use anyhow::Result;
use nalgebra::UnitQuaternion;

use crate::geometry::pose::{Pose, Twist};
use crate::io::{FlightActuator, TelemetrySource, WorldControl};

/// Altitude the vehicle rises to on takeoff from the ground.
const TAKEOFF_ALTITUDE: f64 = 1.0;

/// Kinematic stand-in for the simulator and flight platform.
#[derive(Debug)]
pub struct SimWorld {
    vehicle: Pose,
    target: Pose,
    twist: Twist,
    airborne: bool,
    landed: bool,
    altitude_valid: bool,
    dt: f64,
}

impl SimWorld {
    /// Create a world integrating at the given timestep in seconds.
    pub fn new(dt: f64) -> Self {
        Self {
            vehicle: Pose::from_position(0.0, 0.0, TAKEOFF_ALTITUDE),
            target: Pose::origin(),
            twist: Twist::zero(),
            airborne: true,
            landed: false,
            altitude_valid: true,
            dt,
        }
    }

    /// Place the vehicle at a pose, airborne.
    pub fn with_vehicle(mut self, pose: Pose) -> Self {
        self.vehicle = pose;
        self
    }

    /// Place the landing target.
    pub fn with_target(mut self, pose: Pose) -> Self {
        self.target = pose;
        self
    }

    /// Move the landing target (e.g. to model a drifting platform).
    pub fn set_target(&mut self, pose: Pose) {
        self.target = pose;
    }

    /// Flag altitude telemetry as trusted or not.
    pub fn set_altitude_valid(&mut self, valid: bool) {
        self.altitude_valid = valid;
    }

    /// Current vehicle pose.
    pub fn vehicle(&self) -> Pose {
        self.vehicle
    }

    /// Advance the world by one timestep.
    ///
    /// The commanded body-frame linear velocity is rotated into the world
    /// frame through the vehicle's yaw; the yaw rate integrates into the
    /// heading. A grounded vehicle does not move.
    pub fn step(&mut self) {
        if !self.airborne {
            return;
        }

        let world_linear = self.vehicle.orientation * self.twist.linear;
        self.vehicle.position += world_linear * self.dt;
        if self.vehicle.position.z < 0.0 {
            self.vehicle.position.z = 0.0;
        }

        if self.twist.angular.z != 0.0 {
            let yaw = self.vehicle.yaw() + self.twist.angular.z * self.dt;
            self.vehicle.orientation = UnitQuaternion::from_euler_angles(0.0, 0.0, yaw);
        }
    }
}

impl TelemetrySource for SimWorld {
    fn vehicle_pose(&self) -> Option<Pose> {
        Some(self.vehicle)
    }

    fn target_pose(&self) -> Option<Pose> {
        Some(self.target)
    }

    fn landed_signal(&self) -> bool {
        self.landed
    }

    fn altitude_valid(&self) -> bool {
        self.altitude_valid
    }
}

impl FlightActuator for SimWorld {
    fn dispatch_velocity(&mut self, twist: Twist) -> Result<()> {
        self.twist = twist;
        Ok(())
    }

    fn dispatch_takeoff(&mut self) -> Result<()> {
        self.airborne = true;
        self.landed = false;
        if self.vehicle.position.z < TAKEOFF_ALTITUDE {
            self.vehicle.position.z = TAKEOFF_ALTITUDE;
        }
        Ok(())
    }

    fn dispatch_land(&mut self) -> Result<()> {
        self.airborne = false;
        self.landed = true;
        self.twist = Twist::zero();
        self.vehicle.position.z = self.target.position.z;
        Ok(())
    }
}

impl WorldControl for SimWorld {
    fn apply_spawn_pose(&mut self, pose: Pose) -> Result<()> {
        self.vehicle = pose;
        self.twist = Twist::zero();
        self.airborne = true;
        self.landed = false;
        Ok(())
    }
}
