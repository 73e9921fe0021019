//! Pose and velocity-command value types
//!
//! Poses pair a world-frame position with a unit-quaternion orientation,
//! matching what the external pose source reports every tick. All lengths
//! are meters; no unit conversion happens anywhere in the crate.

use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Position and orientation of a rigid body in the world frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in meters.
    pub position: Vector3<f64>,

    /// Orientation as a unit quaternion (x, y, z, w).
    pub orientation: UnitQuaternion<f64>,
}

impl Pose {
    /// Create a pose from a position and orientation.
    pub fn new(position: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Create a level pose at the given coordinates.
    pub fn from_position(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            orientation: UnitQuaternion::identity(),
        }
    }

    /// The pose at the world origin with identity orientation.
    pub fn origin() -> Self {
        Self::from_position(0.0, 0.0, 0.0)
    }

    /// Position-only offset of `self` relative to `other`.
    ///
    /// The orientation of the result is identity: the training driver
    /// consumes only the positional offset to the target.
    pub fn relative_to(&self, other: &Pose) -> Pose {
        Pose {
            position: self.position - other.position,
            orientation: UnitQuaternion::identity(),
        }
    }

    /// Yaw angle (rotation about the world z axis) in radians.
    pub fn yaw(&self) -> f64 {
        self.orientation.euler_angles().2
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::origin()
    }
}

/// Linear and angular velocity command for the flight-control layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Twist {
    /// Linear velocity in m/s (body frame: x forward, y left, z up).
    pub linear: Vector3<f64>,

    /// Angular velocity in rad/s.
    pub angular: Vector3<f64>,
}

impl Twist {
    /// The all-zero command (hover in place).
    pub fn zero() -> Self {
        Self::default()
    }

    /// A purely linear command.
    pub fn linear(x: f64, y: f64, z: f64) -> Self {
        Self {
            linear: Vector3::new(x, y, z),
            angular: Vector3::zeros(),
        }
    }

    /// A pure yaw-rate command.
    pub fn yaw_rate(rate: f64) -> Self {
        Self {
            linear: Vector3::zeros(),
            angular: Vector3::new(0.0, 0.0, rate),
        }
    }
}
