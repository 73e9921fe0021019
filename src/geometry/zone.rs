//! Training-zone geometry
//!
//! Two axis-aligned cuboids anchored to the landing target define the
//! episode geometry: a small landing zone sitting at the base of a much
//! taller flight zone. Both are rebuilt from the live target position every
//! tick, so a moving target drags its zones along with it.

use nalgebra::Vector3;

use crate::error::EnvError;

/// Axis-aligned cuboid volume anchored at a reference point.
///
/// The cuboid spans `center ± half_extent` horizontally and rises `height`
/// meters from `center.z`. Containment is inclusive at every face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneModel {
    center: Vector3<f64>,
    half_extent: f64,
    height: f64,
}

impl ZoneModel {
    /// Create a zone, rejecting degenerate dimensions.
    pub fn new(center: Vector3<f64>, half_extent: f64, height: f64) -> Result<Self, EnvError> {
        if half_extent <= 0.0 || !half_extent.is_finite() {
            return Err(EnvError::InvalidZoneGeometry(format!(
                "half_extent must be positive, got {half_extent}"
            )));
        }
        if height <= 0.0 || !height.is_finite() {
            return Err(EnvError::InvalidZoneGeometry(format!(
                "height must be positive, got {height}"
            )));
        }
        Ok(Self {
            center,
            half_extent,
            height,
        })
    }

    /// Whether `point` lies within the cuboid, boundary included.
    pub fn contains(&self, point: &Vector3<f64>) -> bool {
        self.contains_footprint(point)
            && point.z >= self.center.z
            && point.z <= self.center.z + self.height
    }

    /// Whether `point` lies within the horizontal footprint, ignoring
    /// altitude.
    ///
    /// Used directly when altitude telemetry is flagged invalid and the
    /// vertical band cannot be trusted.
    pub fn contains_footprint(&self, point: &Vector3<f64>) -> bool {
        (point.x - self.center.x).abs() <= self.half_extent
            && (point.y - self.center.y).abs() <= self.half_extent
    }

    /// Move the zone to a new anchor without changing its dimensions.
    pub fn recenter(&mut self, center: Vector3<f64>) {
        self.center = center;
    }

    /// Anchor point of the zone (base center).
    pub fn center(&self) -> Vector3<f64> {
        self.center
    }

    /// Horizontal half side length in meters.
    pub fn half_extent(&self) -> f64 {
        self.half_extent
    }

    /// Vertical extent above the anchor in meters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Altitude of the top face.
    pub fn ceiling(&self) -> f64 {
        self.center.z + self.height
    }
}

/// The landing zone nested inside the flight zone, both centered on the
/// live target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentGeometry {
    landing: ZoneModel,
    flight: ZoneModel,
}

impl EnvironmentGeometry {
    /// Build the pair from two zones, enforcing the nesting invariant:
    /// the landing footprint fits inside the flight footprint and the
    /// flight zone is strictly taller.
    pub fn from_zones(landing: ZoneModel, flight: ZoneModel) -> Result<Self, EnvError> {
        if landing.half_extent() > flight.half_extent() {
            return Err(EnvError::InvalidZoneGeometry(format!(
                "landing half_extent {} exceeds flight half_extent {}",
                landing.half_extent(),
                flight.half_extent()
            )));
        }
        if flight.height() <= landing.height() {
            return Err(EnvError::InvalidZoneGeometry(format!(
                "flight height {} must exceed landing height {}",
                flight.height(),
                landing.height()
            )));
        }
        Ok(Self { landing, flight })
    }

    /// Recenter both zones on the latest target position.
    ///
    /// Must run before reward evaluation in the same tick; `LandingEnv`
    /// sequences this internally so callers cannot observe stale zones.
    pub fn refresh(&mut self, target: Vector3<f64>) {
        self.landing.recenter(target);
        self.flight.recenter(target);
    }

    /// The small success volume above the target.
    pub fn landing_zone(&self) -> &ZoneModel {
        &self.landing
    }

    /// The bounding training airspace.
    pub fn flight_zone(&self) -> &ZoneModel {
        &self.flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_geometry() -> EnvironmentGeometry {
        let target = Vector3::zeros();
        let landing = ZoneModel::new(target, 0.75, 1.5).unwrap();
        let flight = ZoneModel::new(target, 1.5, 20.0).unwrap();
        EnvironmentGeometry::from_zones(landing, flight).unwrap()
    }

    #[test]
    fn test_contains_interior_point() {
        let zone = ZoneModel::new(Vector3::zeros(), 0.75, 1.5).unwrap();

        assert!(zone.contains(&Vector3::new(0.0, 0.0, 1.0)));
        assert!(zone.contains(&Vector3::new(0.5, -0.5, 0.1)));
    }

    #[test]
    fn test_contains_is_inclusive_at_boundaries() {
        let zone = ZoneModel::new(Vector3::zeros(), 0.75, 1.5).unwrap();

        // Every face, edge-on.
        assert!(zone.contains(&Vector3::new(0.75, 0.0, 1.0)), "x face");
        assert!(zone.contains(&Vector3::new(-0.75, 0.0, 1.0)), "-x face");
        assert!(zone.contains(&Vector3::new(0.0, 0.75, 1.0)), "y face");
        assert!(zone.contains(&Vector3::new(0.0, -0.75, 1.0)), "-y face");
        assert!(zone.contains(&Vector3::new(0.0, 0.0, 0.0)), "base");
        assert!(zone.contains(&Vector3::new(0.0, 0.0, 1.5)), "ceiling");
        assert!(
            zone.contains(&Vector3::new(0.75, 0.75, 1.5)),
            "corner point"
        );
    }

    #[test]
    fn test_contains_rejects_outside_points() {
        let zone = ZoneModel::new(Vector3::zeros(), 0.75, 1.5).unwrap();

        assert!(!zone.contains(&Vector3::new(0.751, 0.0, 1.0)));
        assert!(!zone.contains(&Vector3::new(0.0, -0.751, 1.0)));
        assert!(!zone.contains(&Vector3::new(0.0, 0.0, 1.501)));
        assert!(!zone.contains(&Vector3::new(0.0, 0.0, -0.001)), "below base");
        assert!(!zone.contains(&Vector3::new(5.0, 5.0, 10.0)));
    }

    #[test]
    fn test_footprint_ignores_altitude() {
        let zone = ZoneModel::new(Vector3::zeros(), 0.75, 1.5).unwrap();

        assert!(zone.contains_footprint(&Vector3::new(0.5, 0.5, 100.0)));
        assert!(zone.contains_footprint(&Vector3::new(0.5, 0.5, -100.0)));
        assert!(!zone.contains_footprint(&Vector3::new(0.8, 0.0, 1.0)));
    }

    #[test]
    fn test_offset_center() {
        let zone = ZoneModel::new(Vector3::new(10.0, -5.0, 2.0), 1.0, 3.0).unwrap();

        assert!(zone.contains(&Vector3::new(10.5, -5.5, 4.0)));
        assert!(!zone.contains(&Vector3::new(10.5, -5.5, 1.9)), "below base");
        assert_eq!(zone.ceiling(), 5.0);
    }

    #[test]
    fn test_degenerate_dimensions_rejected() {
        assert!(ZoneModel::new(Vector3::zeros(), 0.0, 1.0).is_err());
        assert!(ZoneModel::new(Vector3::zeros(), -1.0, 1.0).is_err());
        assert!(ZoneModel::new(Vector3::zeros(), 1.0, 0.0).is_err());
        assert!(ZoneModel::new(Vector3::zeros(), 1.0, -2.0).is_err());
        assert!(ZoneModel::new(Vector3::zeros(), f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_nesting_invariant_enforced() {
        let center = Vector3::zeros();
        let landing = ZoneModel::new(center, 2.0, 1.5).unwrap();
        let flight = ZoneModel::new(center, 1.5, 20.0).unwrap();
        assert!(
            EnvironmentGeometry::from_zones(landing, flight).is_err(),
            "landing wider than flight should be rejected"
        );

        let landing = ZoneModel::new(center, 0.75, 20.0).unwrap();
        let flight = ZoneModel::new(center, 1.5, 20.0).unwrap();
        assert!(
            EnvironmentGeometry::from_zones(landing, flight).is_err(),
            "flight must be strictly taller than landing"
        );
    }

    #[test]
    fn test_refresh_moves_both_zones() {
        let mut geometry = test_geometry();
        let moved = Vector3::new(4.0, -2.0, 1.0);

        geometry.refresh(moved);

        assert_eq!(geometry.landing_zone().center(), moved);
        assert_eq!(geometry.flight_zone().center(), moved);
        assert!(geometry.landing_zone().contains(&Vector3::new(4.0, -2.0, 2.0)));
        assert!(!geometry
            .landing_zone()
            .contains(&Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_landing_zone_sits_inside_flight_zone() {
        let geometry = test_geometry();

        // Any point inside the landing zone is inside the flight zone.
        for &(x, y, z) in &[
            (0.0, 0.0, 0.0),
            (0.75, 0.75, 1.5),
            (-0.75, 0.3, 0.2),
            (0.1, -0.6, 1.49),
        ] {
            let p = Vector3::new(x, y, z);
            assert!(geometry.landing_zone().contains(&p));
            assert!(
                geometry.flight_zone().contains(&p),
                "landing-zone point ({x}, {y}, {z}) must be inside the flight zone"
            );
        }
    }
}
