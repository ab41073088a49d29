//! Adapters connecting evacuation routing to external services.
//!
//! Responsibilities:
//! - Implement [`evacroute_core::DirectionsProvider`] over HTTP.
//! - Encapsulate wire formats and their mapping onto core types.
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `evacroute-core`).
//! - Never log or report access tokens.
//!
//! Invariants:
//! - Thread-safe by default where feasible.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod routing;
