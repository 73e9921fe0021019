//! Pose and zone geometry primitives

pub mod pose;
pub mod zone;

pub use pose::{Pose, Twist};
pub use zone::{EnvironmentGeometry, ZoneModel};
