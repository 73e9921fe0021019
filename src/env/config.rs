//! Environment configuration
//!
//! This module defines the zone dimensions, speed limits, reward constants,
//! and tick rate for the landing environment, with validation and builder
//! pattern methods.

use std::time::Duration;

use anyhow::{anyhow, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::EnvError;
use crate::geometry::zone::{EnvironmentGeometry, ZoneModel};

/// Environment configuration parameters
///
/// Default zone dimensions match the training setup the environment was
/// tuned for: a 3 m x 3 m x 20 m flight volume (tall enough for the
/// downward camera to keep the target in view) with a landing volume of
/// roughly a tenth of it sitting at the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Horizontal half side of the flight zone in meters
    pub flight_half_extent: f64,

    /// Height of the flight zone in meters
    pub flight_height: f64,

    /// Horizontal half side of the landing zone in meters
    pub landing_half_extent: f64,

    /// Height of the landing zone in meters
    pub landing_height: f64,

    /// Horizontal and climb movement speed in m/s
    pub cruise_speed: f64,

    /// Climb speed in m/s
    pub climb_speed: f64,

    /// Descent speed in m/s (slower than cruise for a controlled approach)
    pub descent_speed: f64,

    /// Yaw rate for rotate actions in rad/s
    pub yaw_rate: f64,

    /// Terminal reward for landing inside the landing zone
    pub success_reward: f64,

    /// Terminal reward for a wrong-altitude landing or a flight-zone exit
    /// (negative)
    pub failure_penalty: f64,

    /// Upper bound on the dense shaping term's magnitude
    pub shaping_scale: f64,

    /// Control loop frequency in Hz
    pub tick_hz: f64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            flight_half_extent: 1.5,
            flight_height: 20.0,
            landing_half_extent: 0.75,
            landing_height: 1.5,
            cruise_speed: 0.5,
            climb_speed: 0.5,
            descent_speed: 0.2,
            yaw_rate: 0.5,
            success_reward: 100.0,
            failure_penalty: -100.0,
            shaping_scale: 1.0,
            tick_hz: 30.0,
        }
    }
}

impl EnvConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        // Zone dimensions and nesting are checked by geometry construction.
        self.geometry(Vector3::zeros())?;

        if self.cruise_speed <= 0.0 {
            return Err(anyhow!("cruise_speed must be positive"));
        }
        if self.climb_speed <= 0.0 {
            return Err(anyhow!("climb_speed must be positive"));
        }
        if self.descent_speed <= 0.0 {
            return Err(anyhow!("descent_speed must be positive"));
        }
        if self.yaw_rate <= 0.0 {
            return Err(anyhow!("yaw_rate must be positive"));
        }
        if self.success_reward <= 0.0 {
            return Err(anyhow!("success_reward must be positive"));
        }
        if self.failure_penalty >= 0.0 {
            return Err(anyhow!("failure_penalty must be negative"));
        }
        if self.shaping_scale <= 0.0 {
            return Err(anyhow!("shaping_scale must be positive"));
        }
        if self.shaping_scale >= self.success_reward
            || self.shaping_scale >= self.failure_penalty.abs()
        {
            return Err(anyhow!(
                "shaping_scale must stay below the terminal reward magnitudes"
            ));
        }
        if self.tick_hz <= 0.0 {
            return Err(anyhow!("tick_hz must be positive"));
        }

        // The spawn altitude band must contain an integer at any target
        // altitude, not just at z = 0: a band narrower than one unit can
        // slide between two integers once the target sits at a fractional
        // altitude. Requiring a full unit of width rules that out.
        let band_width = self.flight_height - 2.0 * self.landing_height - 1.0;
        if band_width < 1.0 {
            return Err(anyhow!(
                "spawn altitude band is only {band_width:.2} m wide; it must span at \
                 least 1 m, raise flight_height or lower landing_height"
            ));
        }

        Ok(())
    }

    /// Build the zone pair centered on the given target position.
    pub fn geometry(&self, target: Vector3<f64>) -> Result<EnvironmentGeometry, EnvError> {
        let landing = ZoneModel::new(target, self.landing_half_extent, self.landing_height)?;
        let flight = ZoneModel::new(target, self.flight_half_extent, self.flight_height)?;
        EnvironmentGeometry::from_zones(landing, flight)
    }

    /// Duration of one control tick.
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_hz)
    }

    /// Set flight zone half extent
    pub fn flight_half_extent(mut self, meters: f64) -> Self {
        self.flight_half_extent = meters;
        self
    }

    /// Set flight zone height
    pub fn flight_height(mut self, meters: f64) -> Self {
        self.flight_height = meters;
        self
    }

    /// Set landing zone half extent
    pub fn landing_half_extent(mut self, meters: f64) -> Self {
        self.landing_half_extent = meters;
        self
    }

    /// Set landing zone height
    pub fn landing_height(mut self, meters: f64) -> Self {
        self.landing_height = meters;
        self
    }

    /// Set cruise speed
    pub fn cruise_speed(mut self, speed: f64) -> Self {
        self.cruise_speed = speed;
        self
    }

    /// Set climb speed
    pub fn climb_speed(mut self, speed: f64) -> Self {
        self.climb_speed = speed;
        self
    }

    /// Set descent speed
    pub fn descent_speed(mut self, speed: f64) -> Self {
        self.descent_speed = speed;
        self
    }

    /// Set yaw rate
    pub fn yaw_rate(mut self, rate: f64) -> Self {
        self.yaw_rate = rate;
        self
    }

    /// Set success reward
    pub fn success_reward(mut self, reward: f64) -> Self {
        self.success_reward = reward;
        self
    }

    /// Set failure penalty
    pub fn failure_penalty(mut self, penalty: f64) -> Self {
        self.failure_penalty = penalty;
        self
    }

    /// Set shaping scale
    pub fn shaping_scale(mut self, scale: f64) -> Self {
        self.shaping_scale = scale;
        self
    }

    /// Set tick rate
    pub fn tick_hz(mut self, hz: f64) -> Self {
        self.tick_hz = hz;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnvConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.flight_half_extent, 1.5);
        assert_eq!(config.flight_height, 20.0);
        assert_eq!(config.landing_half_extent, 0.75);
        assert_eq!(config.landing_height, 1.5);
        assert_eq!(config.tick_hz, 30.0);
    }

    #[test]
    fn test_config_validation() {
        // Valid config should pass
        let config = EnvConfig::new();
        assert!(config.validate().is_ok());

        // Degenerate zones
        let config = EnvConfig::new().landing_half_extent(0.0);
        assert!(config.validate().is_err());

        // Landing zone wider than flight zone
        let config = EnvConfig::new().landing_half_extent(2.0);
        assert!(config.validate().is_err());

        // Invalid speeds
        let config = EnvConfig::new().cruise_speed(0.0);
        assert!(config.validate().is_err());
        let config = EnvConfig::new().descent_speed(-0.2);
        assert!(config.validate().is_err());

        // Reward signs
        let config = EnvConfig::new().success_reward(-1.0);
        assert!(config.validate().is_err());
        let config = EnvConfig::new().failure_penalty(5.0);
        assert!(config.validate().is_err());

        // Shaping must stay below the terminal magnitudes
        let config = EnvConfig::new().shaping_scale(200.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_spawn_band_rejected() {
        // A flight zone barely taller than the landing zone leaves no
        // integer altitude between the two margins.
        let config = EnvConfig::new().flight_height(3.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_narrow_spawn_band_rejected() {
        // This band contains the integer 2 when the target sits at z = 0,
        // but slides off it entirely at a fractional target altitude; it
        // must be rejected up front.
        let config = EnvConfig::new().landing_height(1.0).flight_height(3.01);
        assert!(
            config.validate().is_err(),
            "a sub-unit spawn band must not validate"
        );

        // One full unit of width admits an integer at every offset.
        let config = EnvConfig::new().landing_height(1.0).flight_height(4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = EnvConfig::new()
            .flight_half_extent(3.0)
            .flight_height(30.0)
            .cruise_speed(1.0)
            .tick_hz(60.0);

        assert_eq!(config.flight_half_extent, 3.0);
        assert_eq!(config.flight_height, 30.0);
        assert_eq!(config.cruise_speed, 1.0);
        assert_eq!(config.tick_hz, 60.0);

        // Other values should remain default
        assert_eq!(config.landing_half_extent, 0.75);
        assert_eq!(config.success_reward, 100.0);
    }

    #[test]
    fn test_tick_period() {
        let config = EnvConfig::new().tick_hz(30.0);
        let period = config.tick_period();
        // Duration carries nanosecond precision, so allow for the rounding.
        assert!((period.as_secs_f64() - 1.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = EnvConfig::new().flight_height(25.0);
        let json = serde_json::to_string(&config).unwrap();
        let back: EnvConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
