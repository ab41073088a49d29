//! Mapbox Directions API (v5) response types.
//!
//! Only the fields needed to build [`RawRoute`] values are decoded; anything
//! else in the payload is ignored.
//!
//! See: <https://docs.mapbox.com/api/navigation/directions/>

use evacroute_core::{Coordinate, RawRoute, RouteError, RouteStep};
use serde::Deserialize;

/// Top-level Directions API response.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    /// Status code from the service.
    ///
    /// Common values:
    /// - `"Ok"` - at least one route was computed
    /// - `"NoRoute"` - the endpoints are not connected
    /// - `"NoSegment"` - an endpoint could not be snapped to the network
    /// - `"InvalidInput"` - the request was rejected
    pub code: String,

    /// Optional explanation when `code` is not `"Ok"`.
    #[serde(default)]
    pub message: Option<String>,

    /// Routes in the service's own order of preference.
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

impl DirectionsResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }

    /// Check if the service answered but could not connect the endpoints.
    #[must_use]
    pub fn is_no_route(&self) -> bool {
        matches!(self.code.as_str(), "NoRoute" | "NoSegment")
    }
}

/// One route of a Directions API response.
#[derive(Debug, Deserialize)]
pub struct DirectionsRoute {
    /// Route length in metres.
    pub distance: f64,
    /// Expected travel time in seconds.
    pub duration: f64,
    /// GeoJSON line string, present when `geometries=geojson` was requested.
    #[serde(default)]
    pub geometry: Option<LineString>,
    /// One leg per pair of consecutive waypoints.
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

/// GeoJSON `LineString` geometry.
#[derive(Debug, Deserialize)]
pub struct LineString {
    /// Positions as `[lon, lat]` or `[lon, lat, elevation]`.
    pub coordinates: Vec<Vec<f64>>,
}

/// Part of a route between two waypoints.
#[derive(Debug, Deserialize)]
pub struct RouteLeg {
    /// Maneuvers, empty unless `steps=true` was requested.
    #[serde(default)]
    pub steps: Vec<LegStep>,
}

/// One maneuver within a leg.
#[derive(Debug, Deserialize)]
pub struct LegStep {
    /// Step length in metres.
    pub distance: f64,
    /// Step duration in seconds.
    pub duration: f64,
    /// Maneuver metadata carrying the instruction text.
    pub maneuver: Maneuver,
}

/// Maneuver details for a step.
#[derive(Debug, Deserialize)]
pub struct Maneuver {
    /// Human-readable instruction.
    #[serde(default)]
    pub instruction: String,
}

/// Error payload returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// Explanation supplied by the service.
    #[serde(default)]
    pub message: Option<String>,
}

impl DirectionsRoute {
    /// Convert into a provider-neutral route.
    ///
    /// Steps are read from the first leg only; requests always carry exactly
    /// two waypoints.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MalformedResponse`] when a geometry position is
    /// short or out of range.
    pub fn into_raw_route(self) -> Result<RawRoute, RouteError> {
        let geometry = self
            .geometry
            .map(|line| {
                line.coordinates
                    .iter()
                    .map(Vec::as_slice)
                    .map(position_to_coordinate)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();
        let steps = self
            .legs
            .into_iter()
            .next()
            .map(|leg| {
                leg.steps
                    .into_iter()
                    .map(|step| {
                        RouteStep::new(step.maneuver.instruction, step.distance, step.duration)
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(RawRoute::new(self.distance, self.duration)
            .with_geometry(geometry)
            .with_steps(steps))
    }
}

fn position_to_coordinate(position: &[f64]) -> Result<Coordinate, RouteError> {
    let [lon, lat, ..] = position else {
        return Err(RouteError::MalformedResponse {
            message: format!("geometry position needs two values, got {}", position.len()),
        });
    };
    Coordinate::new(*lon, *lat).map_err(|err| RouteError::MalformedResponse {
        message: format!("invalid geometry position: {err}"),
    })
}
