//! HTTP-based directions providers for routing services.
//!
//! This module provides [`HttpDirectionsProvider`], an implementation of
//! [`evacroute_core::DirectionsProvider`] that fetches routes from a
//! Mapbox-compatible Directions API.
//!
//! # Architecture
//!
//! The provider is a thin wire adapter: it builds the request URL, maps
//! transport and status failures onto [`evacroute_core::RouteError`] and
//! decodes the JSON payload. Ranking and unit conversion stay in
//! [`evacroute_core::RouteComputer`].
//!
//! # Example
//!
//! ```no_run
//! use evacroute_data::routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig};
//! use std::time::Duration;
//!
//! // Create a provider with custom configuration
//! let config = HttpDirectionsProviderConfig::new("pk.example-token")
//!     .with_profile("mapbox/walking")
//!     .with_timeout(Duration::from_secs(10));
//! let provider = HttpDirectionsProvider::with_config(config)?;
//!
//! // Or read MAPBOX_ACCESS_TOKEN from the environment
//! let provider = HttpDirectionsProvider::from_env()?;
//! # Ok::<(), evacroute_data::routing::ProviderBuildError>(())
//! ```

mod mapbox;
mod provider;

pub use mapbox::{
    DirectionsResponse, DirectionsRoute, ErrorBody, LegStep, LineString, Maneuver, RouteLeg,
};
pub use provider::{
    ACCESS_TOKEN_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_PROFILE, DEFAULT_USER_AGENT,
    HttpDirectionsProvider, HttpDirectionsProviderConfig, PROFILE_ENV, ProviderBuildError,
};
