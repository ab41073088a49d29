//! Circular hazard zones and great-circle proximity checks.
//!
//! Zones are modelled as a centre plus radius. Arbitrary zone shapes would
//! need a point-in-polygon test instead.

use geo::{Distance, Haversine, Point};

use crate::Coordinate;

/// Metres per kilometre.
const METERS_PER_KM: f64 = 1_000.0;

/// An area to avoid, such as an earthquake epicentre buffer.
///
/// # Examples
/// ```
/// use evacroute_core::{Coordinate, DangerZone};
///
/// # fn main() -> Result<(), evacroute_core::CoordinateError> {
/// let zone = DangerZone::new(Coordinate::new(-118.0, 34.0)?, 10.0, "Earthquake");
/// assert!(zone.contains(Coordinate::new(-118.01, 34.01)?));
/// assert!(!zone.contains(Coordinate::new(-117.0, 34.0)?));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DangerZone {
    /// Centre of the zone.
    pub center: Coordinate,
    /// Radius in kilometres.
    pub radius_km: f64,
    /// Hazard label, e.g. "Tsunami".
    pub kind: String,
}

impl DangerZone {
    /// Construct a zone.
    #[must_use]
    pub fn new(center: Coordinate, radius_km: f64, kind: impl Into<String>) -> Self {
        Self {
            center,
            radius_km,
            kind: kind.into(),
        }
    }

    /// Whether `point` lies within the radius; the boundary counts as inside.
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        haversine_km(point, self.center) <= self.radius_km
    }
}

/// Great-circle distance between two coordinates in kilometres.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "unit conversion is inherently floating point"
)]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    Haversine.distance(Point::from(a), Point::from(b)) / METERS_PER_KM
}

/// Whether any point of `geometry` falls inside any of `zones`.
#[must_use]
pub fn route_enters_danger_zone(geometry: &[Coordinate], zones: &[DangerZone]) -> bool {
    zones
        .iter()
        .any(|zone| geometry.iter().any(|point| zone.contains(*point)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn coord(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(lon, lat).expect("valid test coordinate")
    }

    #[fixture]
    fn zone() -> DangerZone {
        DangerZone::new(coord(0.0, 0.0), 100.0, "Tsunami")
    }

    #[rstest]
    fn one_degree_of_latitude_is_about_111_km() {
        let distance = haversine_km(coord(0.0, 0.0), coord(0.0, 1.0));
        assert!((distance - 111.2).abs() < 0.1, "got {distance}");
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = coord(-122.42, 37.77);
        let b = coord(-118.24, 34.05);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[rstest]
    #[case(coord(0.5, 0.0), true)]
    #[case(coord(0.0, 0.0), true)]
    #[case(coord(1.0, 0.0), false)]
    fn contains_checks_radius(zone: DangerZone, #[case] point: Coordinate, #[case] inside: bool) {
        assert_eq!(zone.contains(point), inside);
    }

    #[rstest]
    fn route_entering_any_zone_is_flagged(zone: DangerZone) {
        let far = DangerZone::new(coord(90.0, 45.0), 5.0, "Wildfire");
        let geometry = vec![coord(3.0, 0.0), coord(2.0, 0.0), coord(0.8, 0.0)];
        assert!(route_enters_danger_zone(&geometry, &[far.clone(), zone]));
        assert!(!route_enters_danger_zone(&geometry, &[far]));
    }

    #[rstest]
    fn empty_inputs_never_intersect(zone: DangerZone) {
        assert!(!route_enters_danger_zone(&[], &[zone]));
        assert!(!route_enters_danger_zone(&[coord(0.0, 0.0)], &[]));
    }
}
