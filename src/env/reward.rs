//! Reward policy for the landing task
//!
//! Classifies the vehicle position against the zone geometry and produces
//! the per-tick training signal. The policy is a pure function of its
//! inputs: identical inputs always yield an identical outcome.
//!
//! Reward shaping is a strictly ordered tie-break, first match wins:
//! 1. Touchdown inside the landing zone: success reward, terminal.
//! 2. Touchdown anywhere else: failure penalty, terminal, wrong altitude.
//! 3. Vehicle outside the flight zone: failure penalty, terminal.
//! 4. Otherwise a small dense shaping term pulling toward the landing-zone
//!    center, non-terminal.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::env::action::Action;
use crate::env::config::EnvConfig;
use crate::geometry::pose::Pose;
use crate::geometry::zone::{EnvironmentGeometry, ZoneModel};

/// The per-tick training signal: reward, terminal flag, and wrong-altitude
/// bookkeeping for touchdowns outside the landing zone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EpisodeOutcome {
    /// Scalar reward for the tick.
    pub reward: f64,

    /// Whether the episode reached a terminal state.
    pub done: bool,

    /// Whether a touchdown happened outside the landing zone's footprint.
    pub wrong_altitude: bool,
}

/// Which region of the training volume a position falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneClass {
    /// Inside the landing zone (and therefore inside the flight zone).
    Landing,
    /// Inside the flight zone but outside the landing zone.
    Flight,
    /// Outside the flight zone entirely.
    Outside,
}

/// Containment test that degrades to the horizontal footprint when altitude
/// telemetry cannot be trusted.
fn zone_contains(zone: &ZoneModel, point: &Vector3<f64>, altitude_valid: bool) -> bool {
    if altitude_valid {
        zone.contains(point)
    } else {
        zone.contains_footprint(point)
    }
}

/// Classify a position into exactly one region.
pub fn classify(
    geometry: &EnvironmentGeometry,
    position: &Vector3<f64>,
    altitude_valid: bool,
) -> ZoneClass {
    if zone_contains(geometry.landing_zone(), position, altitude_valid) {
        ZoneClass::Landing
    } else if zone_contains(geometry.flight_zone(), position, altitude_valid) {
        ZoneClass::Flight
    } else {
        ZoneClass::Outside
    }
}

/// Evaluate the reward policy for one tick.
///
/// A touchdown is a `land` action from the driver or the platform's own
/// landed signal; either one terminates the episode. The dense shaping term
/// is `shaping_scale / (1 + d)` where `d` combines the ground-plane
/// Euclidean distance and the vertical offset from the landing-zone center,
/// so it is bounded by `shaping_scale` and grows as the vehicle closes in.
pub fn evaluate(
    config: &EnvConfig,
    geometry: &EnvironmentGeometry,
    vehicle: &Pose,
    last_action: Action,
    altitude_valid: bool,
    landed_signal: bool,
) -> EpisodeOutcome {
    let class = classify(geometry, &vehicle.position, altitude_valid);
    let touchdown = last_action == Action::Land || landed_signal;

    if touchdown {
        if class == ZoneClass::Landing {
            return EpisodeOutcome {
                reward: config.success_reward,
                done: true,
                wrong_altitude: false,
            };
        }
        return EpisodeOutcome {
            reward: config.failure_penalty,
            done: true,
            wrong_altitude: true,
        };
    }

    if class == ZoneClass::Outside {
        return EpisodeOutcome {
            reward: config.failure_penalty,
            done: true,
            wrong_altitude: false,
        };
    }

    let center = geometry.landing_zone().center();
    let dx = vehicle.position.x - center.x;
    let dy = vehicle.position.y - center.y;
    let dz = vehicle.position.z - center.z;
    let distance = dx.hypot(dy) + dz.abs();

    EpisodeOutcome {
        reward: config.shaping_scale / (1.0 + distance),
        done: false,
        wrong_altitude: false,
    }
}
