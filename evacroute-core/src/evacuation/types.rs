//! Targets, ranked results and drop reports.

use crate::{Coordinate, RouteCandidate, RouteError};

/// Category used when the caller does not supply one.
pub const DEFAULT_CATEGORY: &str = "Evacuation Point";

/// A named place a user may want to reach, such as a shelter.
///
/// # Examples
/// ```
/// use evacroute_core::{Coordinate, EvacuationTarget};
///
/// # fn main() -> Result<(), evacroute_core::CoordinateError> {
/// let target = EvacuationTarget::new("Civic Center", Coordinate::new(-122.41, 37.78)?)
///     .with_category("Shelter");
/// assert_eq!(target.category, "Shelter");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvacuationTarget {
    /// Display name, used to identify the target in results and reports.
    pub name: String,
    /// Location of the target.
    pub coordinate: Coordinate,
    /// Free label such as "Shelter" or "Medical".
    #[cfg_attr(feature = "serde", serde(default = "default_category"))]
    pub category: String,
}

#[cfg(feature = "serde")]
fn default_category() -> String {
    DEFAULT_CATEGORY.to_owned()
}

impl EvacuationTarget {
    /// Construct a target with the default category.
    #[must_use]
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
            category: DEFAULT_CATEGORY.to_owned(),
        }
    }

    /// Replace the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// A target paired with its route candidates, primary first.
///
/// The primary candidate is stored apart from the alternatives so a ranked
/// destination always has at least one route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedDestination {
    name: String,
    category: String,
    primary: RouteCandidate,
    alternatives: Vec<RouteCandidate>,
}

impl RankedDestination {
    /// Pair `target` with `routes`; `None` when `routes` is empty.
    pub(crate) fn from_routes(
        target: &EvacuationTarget,
        routes: Vec<RouteCandidate>,
    ) -> Option<Self> {
        let mut routes = routes.into_iter();
        let primary = routes.next()?;
        Some(Self {
            name: target.name.clone(),
            category: target.category.clone(),
            primary,
            alternatives: routes.collect(),
        })
    }

    /// Name of the target.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category of the target.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The recommended route.
    #[must_use]
    pub const fn primary(&self) -> &RouteCandidate {
        &self.primary
    }

    /// Alternative routes in provider order.
    #[must_use]
    pub fn alternatives(&self) -> &[RouteCandidate] {
        &self.alternatives
    }

    /// All routes in provider order, primary first.
    pub fn routes(&self) -> impl Iterator<Item = &RouteCandidate> {
        std::iter::once(&self.primary).chain(&self.alternatives)
    }

    /// Consume into the full route list, primary first.
    #[must_use]
    pub fn into_routes(self) -> Vec<RouteCandidate> {
        let mut routes = Vec::with_capacity(self.alternatives.len() + 1);
        routes.push(self.primary);
        routes.extend(self.alternatives);
        routes
    }

    /// Duration of the primary route in seconds; the ranking key.
    #[must_use]
    pub const fn primary_duration_seconds(&self) -> f64 {
        self.primary.duration_seconds()
    }
}

/// A target removed from a ranking and the reason why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedDestination {
    /// Name of the target.
    pub name: String,
    /// Category of the target.
    pub category: String,
    /// Failure that caused the drop.
    pub error: RouteError,
}

impl DroppedDestination {
    pub(crate) fn new(target: &EvacuationTarget, error: RouteError) -> Self {
        Self {
            name: target.name.clone(),
            category: target.category.clone(),
            error,
        }
    }
}

/// Outcome of ranking a set of targets.
///
/// `ranked` is ordered by ascending primary duration, ties in input order.
/// `dropped` lists failed targets in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvacuationRanking {
    /// Reachable targets, fastest first.
    pub ranked: Vec<RankedDestination>,
    /// Targets whose lookup failed.
    pub dropped: Vec<DroppedDestination>,
}

impl EvacuationRanking {
    /// Number of targets that were looked up.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.ranked.len() + self.dropped.len()
    }

    /// Every attempted target failed.
    ///
    /// An empty input is not a failure.
    #[must_use]
    pub fn is_total_failure(&self) -> bool {
        self.ranked.is_empty() && !self.dropped.is_empty()
    }

    /// Some, but not all, targets were ranked.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.ranked.is_empty() && !self.dropped.is_empty()
    }

    /// The fastest reachable target, if any.
    #[must_use]
    pub fn nearest(&self) -> Option<&RankedDestination> {
        self.ranked.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawRoute;
    use rstest::{fixture, rstest};

    #[fixture]
    fn target() -> EvacuationTarget {
        let coordinate = Coordinate::new(-122.41, 37.78).expect("valid coordinate");
        EvacuationTarget::new("Civic Center", coordinate)
    }

    fn candidate(duration: f64, is_primary: bool) -> RouteCandidate {
        RouteCandidate::from_raw(RawRoute::new(1_000.0, duration), is_primary)
    }

    #[rstest]
    fn new_target_uses_default_category(target: EvacuationTarget) {
        assert_eq!(target.category, DEFAULT_CATEGORY);
    }

    #[rstest]
    fn empty_route_list_cannot_be_ranked(target: EvacuationTarget) {
        assert!(RankedDestination::from_routes(&target, Vec::new()).is_none());
    }

    #[rstest]
    fn routes_keep_provider_order(target: EvacuationTarget) {
        let ranked = RankedDestination::from_routes(
            &target,
            vec![candidate(300.0, true), candidate(200.0, false), candidate(400.0, false)],
        )
        .expect("non-empty routes");

        assert_eq!(ranked.name(), "Civic Center");
        assert_eq!(ranked.primary_duration_seconds(), 300.0);
        assert_eq!(ranked.alternatives().len(), 2);
        let durations: Vec<f64> = ranked.routes().map(RouteCandidate::duration_seconds).collect();
        assert_eq!(durations, vec![300.0, 200.0, 400.0]);
        assert_eq!(ranked.into_routes().len(), 3);
    }

    #[rstest]
    fn ranking_distinguishes_total_and_partial_failure(target: EvacuationTarget) {
        let ranked = RankedDestination::from_routes(&target, vec![candidate(60.0, true)])
            .expect("non-empty routes");
        let dropped = DroppedDestination::new(&target, RouteError::NoRouteFound);

        let partial = EvacuationRanking {
            ranked: vec![ranked],
            dropped: vec![dropped.clone()],
        };
        assert!(partial.is_partial());
        assert!(!partial.is_total_failure());
        assert_eq!(partial.attempted(), 2);

        let total = EvacuationRanking {
            ranked: Vec::new(),
            dropped: vec![dropped],
        };
        assert!(total.is_total_failure());
        assert!(total.nearest().is_none());

        let empty = EvacuationRanking::default();
        assert!(!empty.is_total_failure());
        assert!(!empty.is_partial());
    }
}
