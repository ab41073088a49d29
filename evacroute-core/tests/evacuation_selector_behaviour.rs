//! Behavioural tests for [`EvacuationSelector`].
//!
//! Scenarios run against [`StubDirectionsProvider`] so no directions service
//! is needed.

use std::cell::RefCell;

use evacroute_core::test_support::{RecordingDropObserver, StubDirectionsProvider};
use evacroute_core::{
    Coordinate, DroppedDestination, EvacuationRanking, EvacuationSelector, EvacuationTarget,
    RankedDestination, RawRoute, RouteError, SelectionError,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// World state shared by the selector scenarios.
#[derive(Debug, Default)]
struct SelectionWorld {
    provider: RefCell<Option<StubDirectionsProvider>>,
    targets: RefCell<Vec<EvacuationTarget>>,
    ranking: RefCell<Option<EvacuationRanking>>,
    nearest: RefCell<Option<Result<RankedDestination, SelectionError>>>,
    dropped: RefCell<Vec<DroppedDestination>>,
}

#[fixture]
fn world() -> SelectionWorld {
    SelectionWorld::default()
}

fn coord(lon: f64, lat: f64) -> Coordinate {
    Coordinate::new(lon, lat).expect("valid test coordinate")
}

fn current_location() -> Coordinate {
    coord(-122.45, 37.77)
}

fn civic_center() -> EvacuationTarget {
    EvacuationTarget::new("Civic Center", coord(-122.41, 37.78)).with_category("Shelter")
}

fn moscone() -> EvacuationTarget {
    EvacuationTarget::new("Moscone Shelter", coord(-122.40, 37.78)).with_category("Shelter")
}

fn pier() -> EvacuationTarget {
    EvacuationTarget::new("Pier 39", coord(-122.41, 37.81))
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime should build")
        .block_on(future)
}

fn selector(world: &SelectionWorld) -> EvacuationSelector<StubDirectionsProvider, RecordingDropObserver> {
    let provider = world
        .provider
        .borrow_mut()
        .take()
        .expect("provider must be initialised");
    EvacuationSelector::new(provider).with_observer(RecordingDropObserver::default())
}

// --- Given steps ---

#[given("a shelter five minutes away and a shelter two minutes away")]
fn two_reachable_shelters(world: &SelectionWorld) {
    let provider = StubDirectionsProvider::new()
        .with_routes(civic_center().coordinate, vec![RawRoute::new(4_000.0, 300.0)])
        .with_routes(moscone().coordinate, vec![RawRoute::new(4_500.0, 120.0)]);
    world.provider.replace(Some(provider));
    world.targets.replace(vec![civic_center(), moscone()]);
}

#[given("a shelter five minutes away and a target whose lookup fails")]
fn one_reachable_one_failing(world: &SelectionWorld) {
    let provider = StubDirectionsProvider::new()
        .with_routes(civic_center().coordinate, vec![RawRoute::new(4_000.0, 300.0)])
        .with_error(
            pier().coordinate,
            RouteError::ProviderError {
                status: 503,
                message: "service unavailable".to_owned(),
            },
        );
    world.provider.replace(Some(provider));
    world.targets.replace(vec![civic_center(), pier()]);
}

#[given("only targets without a route")]
fn only_unreachable_targets(world: &SelectionWorld) {
    world.provider.replace(Some(StubDirectionsProvider::new()));
    world.targets.replace(vec![pier()]);
}

// --- When steps ---

#[when("I rank the evacuation targets")]
fn rank_targets(world: &SelectionWorld) {
    let selector = selector(world);
    let targets = world.targets.borrow();
    let ranking = block_on(selector.rank(current_location(), &targets));
    world.ranking.replace(Some(ranking));
    world.dropped.replace(selector.observer().dropped());
}

#[when("I ask for the nearest evacuation target")]
fn ask_for_nearest(world: &SelectionWorld) {
    let selector = selector(world);
    let targets = world.targets.borrow();
    let nearest = block_on(selector.nearest_to(current_location(), &targets));
    world.nearest.replace(Some(nearest));
    world.dropped.replace(selector.observer().dropped());
}

// --- Then steps ---

fn ranked_names(world: &SelectionWorld) -> Vec<String> {
    let borrowed = world.ranking.borrow();
    let ranking = borrowed.as_ref().expect("ranking should be computed");
    ranking
        .ranked
        .iter()
        .map(|destination| destination.name().to_owned())
        .collect()
}

#[then("the two minute shelter is ranked first")]
fn two_minute_shelter_first(world: &SelectionWorld) {
    assert_eq!(ranked_names(world), vec!["Moscone Shelter", "Civic Center"]);
}

#[then("no target is dropped")]
fn nothing_dropped(world: &SelectionWorld) {
    assert!(world.dropped.borrow().is_empty());
    let borrowed = world.ranking.borrow();
    let ranking = borrowed.as_ref().expect("ranking should be computed");
    assert!(ranking.dropped.is_empty());
    assert!(!ranking.is_partial());
}

#[then("only the five minute shelter is ranked")]
fn only_five_minute_shelter(world: &SelectionWorld) {
    assert_eq!(ranked_names(world), vec!["Civic Center"]);
}

#[then("the failing target is reported as dropped")]
fn failing_target_dropped(world: &SelectionWorld) {
    let dropped = world.dropped.borrow();
    let names: Vec<&str> = dropped.iter().map(|report| report.name.as_str()).collect();
    assert_eq!(names, vec!["Pier 39"]);
    let borrowed = world.ranking.borrow();
    let ranking = borrowed.as_ref().expect("ranking should be computed");
    assert!(ranking.is_partial(), "expected a partial ranking");
}

#[then("no evacuation target is found")]
fn nothing_found(world: &SelectionWorld) {
    let borrowed = world.nearest.borrow();
    let nearest = borrowed.as_ref().expect("nearest should be computed");
    assert_eq!(nearest, &Err(SelectionError::NotFound { attempted: 1 }));
    assert_eq!(world.dropped.borrow().len(), 1);
}

#[then("the nearest target is the two minute shelter")]
fn nearest_is_two_minute_shelter(world: &SelectionWorld) {
    let borrowed = world.nearest.borrow();
    let nearest = borrowed
        .as_ref()
        .expect("nearest should be computed")
        .as_ref()
        .expect("a target should be reachable");
    assert_eq!(nearest.name(), "Moscone Shelter");
    assert_eq!(nearest.category(), "Shelter");
    assert_eq!(nearest.primary().duration_minutes(), 2.0);
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/evacuation_selector.feature", name = $title)]
        fn $fn_name(world: SelectionWorld) {
            let _ = world;
        }
    };
}

register_scenario!(
    ranking_by_primary_duration,
    "ranking reachable targets by primary route duration"
);
register_scenario!(
    dropping_failed_lookup,
    "dropping a target whose lookup fails"
);
register_scenario!(no_reachable_target, "no reachable target");
register_scenario!(choosing_nearest_target, "choosing the nearest target");
