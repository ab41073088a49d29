//! Per-request routing options.

use std::fmt;

/// Level of detail requested for route geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Overview {
    /// The most detailed geometry the provider offers.
    #[default]
    Full,
    /// A generalised geometry suitable for overview display.
    Simplified,
}

impl Overview {
    /// Wire value understood by Directions APIs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Simplified => "simplified",
        }
    }
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling a single route computation.
///
/// Defaults request alternatives, turn-by-turn steps and full geometry.
///
/// # Examples
/// ```
/// use evacroute_core::{Overview, RouteOptions};
///
/// let options = RouteOptions::default()
///     .with_alternatives(false)
///     .with_overview(Overview::Simplified);
/// assert!(!options.alternatives);
/// assert!(options.include_steps);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RouteOptions {
    /// Ask the provider for distinct alternative paths.
    pub alternatives: bool,
    /// Ask the provider for turn-by-turn maneuvers.
    pub include_steps: bool,
    /// Geometry detail level.
    pub overview: Overview,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            alternatives: true,
            include_steps: true,
            overview: Overview::Full,
        }
    }
}

impl RouteOptions {
    /// Set whether alternative routes are requested.
    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: bool) -> Self {
        self.alternatives = alternatives;
        self
    }

    /// Set whether turn-by-turn steps are requested.
    #[must_use]
    pub const fn with_steps(mut self, include_steps: bool) -> Self {
        self.include_steps = include_steps;
        self
    }

    /// Set the geometry detail level.
    #[must_use]
    pub const fn with_overview(mut self, overview: Overview) -> Self {
        self.overview = overview;
        self
    }
}
