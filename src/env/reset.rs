//! Randomized spawn-pose sampling for episode reset
//!
//! On reset the vehicle respawns somewhere over the target: anywhere in the
//! flight zone's footprint (deliberately including the landing zone's own
//! footprint), at an integer altitude strictly between the landing-zone
//! ceiling and the flight-zone ceiling with a one-unit margin, facing a
//! uniformly random heading, level.

use nalgebra::{UnitQuaternion, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::pose::Pose;
use crate::geometry::zone::EnvironmentGeometry;

/// Draws randomized spawn poses for episode resets.
///
/// Stochastic by contract; construct with [`ResetSampler::seeded`] when a
/// reproducible stream is needed.
#[derive(Debug)]
pub struct ResetSampler {
    rng: StdRng,
}

impl ResetSampler {
    /// Create a sampler seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a sampler with a fixed seed for reproducible streams.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a spawn pose over the target.
    ///
    /// Horizontal coordinates are uniform over the closed flight-zone
    /// footprint; only altitude is constrained away from an immediate
    /// collision. Altitude is an integer drawn from
    /// `[target.z + landing_height + 1, target.z + flight_height - landing_height]`.
    pub fn sample(&mut self, target: &Pose, geometry: &EnvironmentGeometry) -> Pose {
        let t = target.position;
        let half = geometry.flight_zone().half_extent();
        let landing_height = geometry.landing_zone().height();
        let flight_height = geometry.flight_zone().height();

        let x = self.rng.gen_range(t.x - half..=t.x + half);
        let y = self.rng.gen_range(t.y - half..=t.y + half);

        let z_low = (t.z + landing_height + 1.0).ceil() as i64;
        let z_high = (t.z + flight_height - landing_height).floor() as i64;
        // A validated config always leaves z_low <= z_high; for geometry
        // built by other means a degenerate band falls back to the lowest
        // safe altitude rather than panicking mid-tick.
        let z = if z_low <= z_high {
            self.rng.gen_range(z_low..=z_high) as f64
        } else {
            z_low as f64
        };

        let yaw_deg: f64 = self.rng.gen_range(0.0..360.0);
        let orientation = UnitQuaternion::from_euler_angles(0.0, 0.0, yaw_deg.to_radians());

        Pose::new(Vector3::new(x, y, z), orientation)
    }
}

impl Default for ResetSampler {
    fn default() -> Self {
        Self::new()
    }
}
