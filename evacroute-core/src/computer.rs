//! Turn a start/end pair into ranked route candidates.
//!
//! The provider's own ordering is trusted: the first raw path becomes the
//! primary candidate and the rest keep their relative order. Re-sorting by
//! duration happens only when comparing destinations in
//! [`crate::EvacuationSelector`].

use log::debug;

use crate::{
    Coordinate, DirectionsProvider, DirectionsRequest, InstructionStep, RawRoute, RouteCandidate,
    RouteError, RouteOptions,
};

/// Computes route candidates through a [`DirectionsProvider`].
///
/// The computer holds no state between calls; every request goes to the
/// provider and nothing is cached.
///
/// # Examples
/// ```
/// use async_trait::async_trait;
/// use evacroute_core::{
///     Coordinate, DirectionsProvider, DirectionsRequest, RawRoute, RouteComputer, RouteError,
///     RouteOptions,
/// };
///
/// struct TwoWays;
///
/// #[async_trait]
/// impl DirectionsProvider for TwoWays {
///     async fn fetch_routes(&self, _: &DirectionsRequest) -> Result<Vec<RawRoute>, RouteError> {
///         Ok(vec![RawRoute::new(5_000.0, 420.0), RawRoute::new(6_000.0, 480.0)])
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let start = Coordinate::new(-122.42, 37.77)?;
/// let end = Coordinate::new(-122.48, 37.76)?;
/// let computer = RouteComputer::new(TwoWays);
///
/// let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// let routes = runtime.block_on(computer.compute_routes(start, end, &RouteOptions::default()))?;
/// assert!(routes[0].is_primary());
/// assert_eq!(routes[0].duration_minutes(), 7.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RouteComputer<P> {
    provider: P,
}

impl<P> RouteComputer<P>
where
    P: DirectionsProvider,
{
    /// Wrap a provider.
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Borrow the underlying provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Request routes from `start` to `end` and rank them.
    ///
    /// Issues exactly one provider request. The first returned path is
    /// marked primary.
    ///
    /// # Errors
    ///
    /// Propagates [`RouteError::ProviderUnavailable`] and
    /// [`RouteError::ProviderError`] from the provider without retrying.
    /// Returns [`RouteError::NoRouteFound`] when the provider reports no
    /// paths and [`RouteError::MalformedResponse`] when a path carries a
    /// negative or non-finite distance or duration.
    pub async fn compute_routes(
        &self,
        start: Coordinate,
        end: Coordinate,
        options: &RouteOptions,
    ) -> Result<Vec<RouteCandidate>, RouteError> {
        let request = DirectionsRequest::new(start, end, *options);
        debug!("requesting routes from {start} to {end}");
        let raw_routes = self.provider.fetch_routes(&request).await?;
        if raw_routes.is_empty() {
            debug!("provider returned no routes from {start} to {end}");
            return Err(RouteError::NoRouteFound);
        }
        debug!("provider returned {} route(s)", raw_routes.len());

        raw_routes
            .into_iter()
            .enumerate()
            .map(|(position, raw)| {
                validate_metrics(&raw)?;
                Ok(RouteCandidate::from_raw(raw, position == 0))
            })
            .collect()
    }
}

/// Numbered display instructions for `route`.
///
/// Pure; never touches a provider. A route without steps yields an empty
/// list.
#[must_use]
pub fn derive_instructions(route: &RouteCandidate) -> Vec<InstructionStep> {
    route.instructions()
}

fn validate_metrics(raw: &RawRoute) -> Result<(), RouteError> {
    let valid = |value: f64| value.is_finite() && value >= 0.0;
    if !(valid(raw.distance_meters) && valid(raw.duration_seconds)) {
        return Err(RouteError::MalformedResponse {
            message: format!(
                "route metrics must be finite and non-negative (distance {}, duration {})",
                raw.distance_meters, raw.duration_seconds
            ),
        });
    }
    match (1_usize..)
        .zip(&raw.steps)
        .find(|(_, step)| !(valid(step.distance_meters) && valid(step.duration_seconds)))
    {
        Some((position, step)) => Err(RouteError::MalformedResponse {
            message: format!(
                "step {position} metrics must be finite and non-negative (distance {}, duration {})",
                step.distance_meters, step.duration_seconds
            ),
        }),
        None => Ok(()),
    }
}
