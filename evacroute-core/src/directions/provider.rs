//! Directions provider trait and the provider-neutral route shape.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{Coordinate, RouteOptions, RouteStep};

use super::error::RouteError;

/// A single provider request: ordered endpoints plus options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionsRequest {
    /// Where the route starts.
    pub start: Coordinate,
    /// Where the route ends.
    pub end: Coordinate,
    /// Flags forwarded to the provider.
    pub options: RouteOptions,
}

impl DirectionsRequest {
    /// Build a request for `start` to `end`.
    #[must_use]
    pub const fn new(start: Coordinate, end: Coordinate, options: RouteOptions) -> Self {
        Self {
            start,
            end,
            options,
        }
    }
}

/// A path exactly as reported by a provider, in SI units.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRoute {
    /// Route length in metres.
    pub distance_meters: f64,
    /// Expected travel time in seconds.
    pub duration_seconds: f64,
    /// Path shape from start to end.
    pub geometry: Vec<Coordinate>,
    /// Maneuvers of the first leg, one per turn.
    pub steps: Vec<RouteStep>,
}

impl RawRoute {
    /// Construct a route without geometry or steps.
    #[must_use]
    pub const fn new(distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            distance_meters,
            duration_seconds,
            geometry: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Attach the path shape.
    #[must_use]
    pub fn with_geometry(mut self, geometry: Vec<Coordinate>) -> Self {
        self.geometry = geometry;
        self
    }

    /// Attach turn-by-turn steps.
    #[must_use]
    pub fn with_steps(mut self, steps: Vec<RouteStep>) -> Self {
        self.steps = steps;
        self
    }
}

/// Fetch candidate routes between two points from an external service.
///
/// Implementations issue exactly one request per call and return the raw
/// paths in the provider's own order. An empty vector is a valid answer; the
/// caller decides what "no route" means. Transport failures map to
/// [`RouteError::ProviderUnavailable`] and failure statuses to
/// [`RouteError::ProviderError`].
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use evacroute_core::{DirectionsProvider, DirectionsRequest, RawRoute, RouteError};
///
/// struct StraightLine;
///
/// #[async_trait]
/// impl DirectionsProvider for StraightLine {
///     async fn fetch_routes(
///         &self,
///         request: &DirectionsRequest,
///     ) -> Result<Vec<RawRoute>, RouteError> {
///         let route = RawRoute::new(1_000.0, 60.0)
///             .with_geometry(vec![request.start, request.end]);
///         Ok(vec![route])
///     }
/// }
/// ```
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Return raw routes for `request` in provider order.
    async fn fetch_routes(&self, request: &DirectionsRequest) -> Result<Vec<RawRoute>, RouteError>;
}

#[async_trait]
impl<P> DirectionsProvider for Arc<P>
where
    P: DirectionsProvider + ?Sized,
{
    async fn fetch_routes(&self, request: &DirectionsRequest) -> Result<Vec<RawRoute>, RouteError> {
        (**self).fetch_routes(request).await
    }
}

#[async_trait]
impl<P> DirectionsProvider for &P
where
    P: DirectionsProvider + ?Sized,
{
    async fn fetch_routes(&self, request: &DirectionsRequest) -> Result<Vec<RawRoute>, RouteError> {
        (**self).fetch_routes(request).await
    }
}
