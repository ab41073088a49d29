//! Core routing types for evacuation guidance.
//!
//! [`RouteComputer`] turns a start/end pair into route candidates through a
//! pluggable [`DirectionsProvider`], marking the provider's first path as
//! primary and converting metrics into display units.
//! [`EvacuationSelector`] repeats that per named target, drops unreachable
//! targets without failing the whole request and ranks the rest by primary
//! route duration.
//!
//! Nothing here performs I/O directly. HTTP-backed providers live in the
//! `evacroute-data` crate.

#![forbid(unsafe_code)]

mod computer;
mod coordinate;
pub mod directions;
mod evacuation;
pub mod hazard;
mod options;
mod route;
#[doc(hidden)]
pub mod test_support;
pub mod units;

pub use computer::{RouteComputer, derive_instructions};
pub use coordinate::{Coordinate, CoordinateError};
pub use directions::{DirectionsProvider, DirectionsRequest, RawRoute, RouteError};
pub use evacuation::{
    DEFAULT_CATEGORY, DEFAULT_CONCURRENCY, DropObserver, DroppedDestination, EvacuationRanking,
    EvacuationSelector, EvacuationTarget, LogDropObserver, RankedDestination, SelectionError,
};
pub use hazard::{DangerZone, haversine_km, route_enters_danger_zone};
pub use options::{Overview, RouteOptions};
pub use route::{InstructionStep, RouteCandidate, RouteStep};
