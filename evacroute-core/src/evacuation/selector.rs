//! Concurrent per-target route lookups with failure containment.

use std::num::NonZeroUsize;

use futures_util::stream::{self, StreamExt};
use log::debug;

use crate::{Coordinate, DirectionsProvider, RouteComputer, RouteError, RouteOptions};

use super::{
    DropObserver, DroppedDestination, EvacuationRanking, EvacuationTarget, LogDropObserver,
    RankedDestination, SelectionError,
};

/// Default number of lookups in flight at once.
pub const DEFAULT_CONCURRENCY: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(limit) => limit,
    None => NonZeroUsize::MIN,
};

/// Finds the fastest reachable evacuation targets.
///
/// Each target is looked up independently through a [`RouteComputer`].
/// Lookups run concurrently up to the configured limit; outcomes are
/// collected in input order before sorting, so the result does not depend on
/// completion order. A limit of one gives strictly sequential lookups.
///
/// # Examples
/// ```
/// use async_trait::async_trait;
/// use evacroute_core::{
///     Coordinate, DirectionsProvider, DirectionsRequest, EvacuationSelector, EvacuationTarget,
///     RawRoute, RouteError,
/// };
///
/// /// Pretends travel time grows with longitude difference.
/// struct Eastward;
///
/// #[async_trait]
/// impl DirectionsProvider for Eastward {
///     async fn fetch_routes(&self, request: &DirectionsRequest) -> Result<Vec<RawRoute>, RouteError> {
///         let seconds = (request.end.lon() - request.start.lon()).abs() * 10_000.0;
///         Ok(vec![RawRoute::new(seconds * 15.0, seconds)])
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let here = Coordinate::new(-122.45, 37.77)?;
/// let targets = vec![
///     EvacuationTarget::new("Far", Coordinate::new(-122.35, 37.77)?),
///     EvacuationTarget::new("Near", Coordinate::new(-122.43, 37.77)?),
/// ];
/// let selector = EvacuationSelector::new(Eastward);
///
/// let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// let nearest = runtime.block_on(selector.nearest_to(here, &targets))?;
/// assert_eq!(nearest.name(), "Near");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EvacuationSelector<P, O = LogDropObserver> {
    computer: RouteComputer<P>,
    observer: O,
    options: RouteOptions,
    concurrency: NonZeroUsize,
}

impl<P> EvacuationSelector<P, LogDropObserver>
where
    P: DirectionsProvider,
{
    /// Build a selector that logs dropped targets and uses default options.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            computer: RouteComputer::new(provider),
            observer: LogDropObserver,
            options: RouteOptions::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl<P, O> EvacuationSelector<P, O>
where
    P: DirectionsProvider,
    O: DropObserver,
{
    /// Replace the observer that receives drop reports.
    #[must_use]
    pub fn with_observer<N>(self, observer: N) -> EvacuationSelector<P, N>
    where
        N: DropObserver,
    {
        EvacuationSelector {
            computer: self.computer,
            observer,
            options: self.options,
            concurrency: self.concurrency,
        }
    }

    /// Replace the options used for every lookup.
    #[must_use]
    pub fn with_options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }

    /// Limit the number of lookups in flight at once.
    #[must_use]
    pub fn with_concurrency(mut self, limit: NonZeroUsize) -> Self {
        self.concurrency = limit;
        self
    }

    /// The computer used for each lookup.
    #[must_use]
    pub const fn computer(&self) -> &RouteComputer<P> {
        &self.computer
    }

    /// The observer receiving drop reports.
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Look up every target and rank the reachable ones.
    ///
    /// Failed lookups are reported to the observer and listed in
    /// [`EvacuationRanking::dropped`]; they never abort the ranking.
    pub async fn rank(&self, current: Coordinate, targets: &[EvacuationTarget]) -> EvacuationRanking {
        debug!(
            "ranking {} evacuation target(s) with up to {} lookup(s) in flight",
            targets.len(),
            self.concurrency
        );
        let outcomes: Vec<_> = stream::iter(targets)
            .map(|target| {
                self.computer
                    .compute_routes(current, target.coordinate, &self.options)
            })
            .buffered(self.concurrency.get())
            .collect()
            .await;

        let mut ranking = EvacuationRanking {
            ranked: Vec::with_capacity(targets.len()),
            dropped: Vec::new(),
        };
        for (target, outcome) in targets.iter().zip(outcomes) {
            let ranked = outcome.and_then(|routes| {
                RankedDestination::from_routes(target, routes).ok_or(RouteError::NoRouteFound)
            });
            match ranked {
                Ok(destination) => ranking.ranked.push(destination),
                Err(error) => {
                    let dropped = DroppedDestination::new(target, error);
                    self.observer.destination_dropped(&dropped);
                    ranking.dropped.push(dropped);
                }
            }
        }

        // Stable: equal durations keep input order.
        ranking.ranked.sort_by(|a, b| {
            a.primary_duration_seconds()
                .total_cmp(&b.primary_duration_seconds())
        });
        debug!(
            "ranked {} of {} evacuation target(s)",
            ranking.ranked.len(),
            ranking.attempted()
        );
        ranking
    }

    /// Reachable targets sorted by primary route duration, fastest first.
    ///
    /// An empty result means no target was reachable; it is not an error.
    pub async fn rank_destinations(
        &self,
        current: Coordinate,
        targets: &[EvacuationTarget],
    ) -> Vec<RankedDestination> {
        self.rank(current, targets).await.ranked
    }

    /// The fastest reachable target.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NotFound`] when no target is reachable.
    pub async fn nearest_to(
        &self,
        current: Coordinate,
        targets: &[EvacuationTarget],
    ) -> Result<RankedDestination, SelectionError> {
        self.rank_destinations(current, targets)
            .await
            .into_iter()
            .next()
            .ok_or(SelectionError::NotFound {
                attempted: targets.len(),
            })
    }
}
