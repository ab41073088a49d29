//! Ranking when lookups finish in a different order than they were issued.
//!
//! The provider here delays each answer per destination so that earlier
//! targets complete last on a multi-threaded runtime.

use std::num::NonZeroUsize;
use std::time::Duration;

use async_trait::async_trait;
use evacroute_core::test_support::{RecordingDropObserver, StubDirectionsProvider};
use evacroute_core::{
    Coordinate, DirectionsProvider, DirectionsRequest, EvacuationRanking, EvacuationSelector,
    EvacuationTarget, RankedDestination, RawRoute, RouteError,
};
use rstest::rstest;

/// Answers from a stub after a per-destination delay.
struct DelayedProvider {
    inner: StubDirectionsProvider,
    delays: Vec<(Coordinate, Duration)>,
}

#[async_trait]
impl DirectionsProvider for DelayedProvider {
    async fn fetch_routes(&self, request: &DirectionsRequest) -> Result<Vec<RawRoute>, RouteError> {
        let delay = self
            .delays
            .iter()
            .find(|(coordinate, _)| *coordinate == request.end)
            .map_or(Duration::ZERO, |(_, delay)| *delay);
        tokio::time::sleep(delay).await;
        self.inner.fetch_routes(request).await
    }
}

fn target(index: u32) -> EvacuationTarget {
    let coordinate =
        Coordinate::new(-122.40 - f64::from(index) * 0.01, 37.8).expect("valid coordinate");
    EvacuationTarget::new(format!("t{index}"), coordinate)
}

/// Rank targets whose outcomes are given in input order.
///
/// `Some(seconds)` makes the target reachable; `None` makes its lookup fail.
/// The first target answers last.
fn rank_out_of_order(outcomes: &[Option<f64>]) -> EvacuationRanking {
    let mut stub = StubDirectionsProvider::new();
    let mut delays = Vec::new();
    let mut targets = Vec::new();
    for (index, outcome) in (0_u32..).zip(outcomes) {
        let target = target(index);
        stub = match outcome {
            Some(seconds) => {
                stub.with_routes(target.coordinate, vec![RawRoute::new(1_000.0, *seconds)])
            }
            None => stub.with_error(target.coordinate, RouteError::NoRouteFound),
        };
        let delay = if index == 0 { 80 } else { 5 };
        delays.push((target.coordinate, Duration::from_millis(delay)));
        targets.push(target);
    }
    let provider = DelayedProvider {
        inner: stub,
        delays,
    };
    let selector = EvacuationSelector::new(provider)
        .with_observer(RecordingDropObserver::default())
        .with_concurrency(NonZeroUsize::new(4).expect("non-zero limit"));
    let current = Coordinate::new(-122.45, 37.77).expect("valid coordinate");

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("runtime should build")
        .block_on(selector.rank(current, &targets))
}

fn names(ranking: &EvacuationRanking) -> Vec<&str> {
    ranking.ranked.iter().map(RankedDestination::name).collect()
}

fn dropped(ranking: &EvacuationRanking) -> Vec<&str> {
    ranking
        .dropped
        .iter()
        .map(|report| report.name.as_str())
        .collect()
}

#[rstest]
fn ties_keep_input_order_when_first_lookup_finishes_last() {
    let ranking = rank_out_of_order(&[Some(100.0), Some(100.0), Some(100.0), None]);

    assert_eq!(names(&ranking), vec!["t0", "t1", "t2"]);
    assert_eq!(dropped(&ranking), vec!["t3"]);
}

#[rstest]
#[case(&[Some(300.0), Some(100.0), None, Some(200.0)], &["t1", "t3", "t0"], &["t2"])]
#[case(&[Some(50.0), Some(400.0), Some(200.0), Some(200.0)], &["t0", "t2", "t3", "t1"], &[])]
#[case(&[None, Some(90.0), Some(90.0), Some(30.0)], &["t3", "t1", "t2"], &["t0"])]
fn ranking_ignores_completion_order(
    #[case] outcomes: &[Option<f64>],
    #[case] expected_ranked: &[&str],
    #[case] expected_dropped: &[&str],
) {
    let ranking = rank_out_of_order(outcomes);

    assert_eq!(names(&ranking), expected_ranked);
    assert_eq!(dropped(&ranking), expected_dropped);
}
