//! Rank named evacuation targets by fastest reachable route.
//!
//! [`EvacuationSelector`] fans one route computation out per target,
//! contains per-target failures and sorts the survivors by the duration of
//! their primary route. A target whose lookup fails is dropped and reported
//! to a [`DropObserver`]; the ranking as a whole never fails.

mod error;
mod observer;
mod selector;
mod types;

pub use error::SelectionError;
pub use observer::{DropObserver, LogDropObserver};
pub use selector::{DEFAULT_CONCURRENCY, EvacuationSelector};
pub use types::{
    DEFAULT_CATEGORY, DroppedDestination, EvacuationRanking, EvacuationTarget, RankedDestination,
};
