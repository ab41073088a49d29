//! The seam between route ranking and an external directions service.
//!
//! A [`DirectionsProvider`] turns a [`DirectionsRequest`] into zero or more
//! [`RawRoute`] values in provider order. Ranking, unit conversion and the
//! empty-result policy live in [`crate::RouteComputer`], so providers stay
//! thin wire adapters.

mod error;
mod provider;

pub use error::RouteError;
pub use provider::{DirectionsProvider, DirectionsRequest, RawRoute};
