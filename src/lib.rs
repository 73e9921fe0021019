//! # perch-rl
//!
//! Episodic environment backend for training a quadrotor landing agent.
//!
//! Given the vehicle's pose relative to a landing target, the environment
//! classifies the position against a nested pair of training zones,
//! produces a scalar reward and terminal flag every tick, and on reset
//! respawns the vehicle at a randomized pose inside the safe band over the
//! target. The learning algorithm itself lives outside this crate; any
//! agent can be trained against the [`service::EnvHandle`] surface.
//!
//! ## Quick Start
//!
//! ```rust
//! use perch_rl::prelude::*;
//!
//! let config = EnvConfig::default();
//! let dt = config.tick_period().as_secs_f64();
//! let env = LandingEnv::new(config).unwrap();
//! let world = SimWorld::new(dt).with_vehicle(Pose::from_position(0.0, 0.0, 5.0));
//!
//! let mut runner = TickRunner::new(env, ResetSampler::new(), world);
//! let handle = runner.handle();
//!
//! handle.request_command(Action::Descend);
//! runner.tick();
//! assert!(!handle.outcome().done);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Landing environment core: actions, reward policy, reset sampling, state
pub mod env;

/// Error taxonomy
pub mod error;

/// Pose and zone geometry primitives
pub mod geometry;

/// Collaborator seams and the in-process simulated world
pub mod io;

/// Tick loop and the driver-facing control/status surface
pub mod service;

/// Transition recording
pub mod trajectory;

/// Prelude module for convenient imports
///
/// This module re-exports commonly used types and traits for convenience.
pub mod prelude {
    pub use crate::env::{
        Action, EnvConfig, EpisodeOutcome, FlightCommand, LandingEnv, Phase, ResetSampler,
        ZoneClass,
    };
    pub use crate::error::EnvError;
    pub use crate::geometry::{EnvironmentGeometry, Pose, Twist, ZoneModel};
    pub use crate::io::sim::SimWorld;
    pub use crate::io::{FlightActuator, TelemetrySource, World, WorldControl};
    pub use crate::service::{EnvHandle, StatusSnapshot, TickRunner};
    pub use crate::trajectory::{EpisodeRecorder, Transition};
}

/// Current version of perch-rl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
