//! Facade crate for evacuation routing.
//!
//! This crate re-exports the core routing types and exposes the HTTP
//! directions provider behind the `http` feature flag.

#![forbid(unsafe_code)]

pub use evacroute_core::{
    Coordinate, CoordinateError, DangerZone, DirectionsProvider, DirectionsRequest, DropObserver,
    DroppedDestination, EvacuationRanking, EvacuationSelector, EvacuationTarget, InstructionStep,
    LogDropObserver, Overview, RankedDestination, RawRoute, RouteCandidate, RouteComputer,
    RouteError, RouteOptions, RouteStep, SelectionError, derive_instructions, haversine_km,
    route_enters_danger_zone, units,
};

#[cfg(feature = "http")]
pub use evacroute_data::routing::{
    HttpDirectionsProvider, HttpDirectionsProviderConfig, ProviderBuildError,
};
