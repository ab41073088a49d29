//! Ranked route candidates and their turn-by-turn instructions.

use std::fmt;

use crate::hazard::{DangerZone, route_enters_danger_zone};
use crate::units::{meters_to_miles, seconds_to_minutes};
use crate::{Coordinate, RawRoute};

/// One maneuver along a route, in SI units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStep {
    /// Free-text instruction, e.g. "Turn left onto Main Street".
    pub instruction: String,
    /// Length of the step in metres.
    pub distance_meters: f64,
    /// Travel time of the step in seconds.
    pub duration_seconds: f64,
}

impl RouteStep {
    /// Construct a step.
    #[must_use]
    pub fn new(instruction: impl Into<String>, distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            instruction: instruction.into(),
            distance_meters,
            duration_seconds,
        }
    }
}

/// A numbered instruction ready for display.
///
/// # Examples
/// ```
/// use evacroute_core::InstructionStep;
///
/// let step = InstructionStep {
///     index: 1,
///     instruction: "Head north".into(),
///     distance_miles: 0.4,
///     duration_minutes: 1.5,
/// };
/// assert_eq!(step.to_string(), "1. Head north (0.4 mi, 1.5 min)");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstructionStep {
    /// Position of the step, starting at 1.
    pub index: usize,
    /// Instruction text as supplied by the provider.
    pub instruction: String,
    /// Step length in miles, one decimal.
    pub distance_miles: f64,
    /// Step duration in minutes, one decimal.
    pub duration_minutes: f64,
}

impl fmt::Display for InstructionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} ({:.1} mi, {:.1} min)",
            self.index, self.instruction, self.distance_miles, self.duration_minutes
        )
    }
}

/// One computed path between two coordinates.
///
/// Candidates are built fresh from each provider response and never change
/// afterwards. Display values are derived once from the SI values, which are
/// kept unrounded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteCandidate {
    geometry: Vec<Coordinate>,
    distance_meters: f64,
    duration_seconds: f64,
    distance_miles: f64,
    duration_minutes: f64,
    steps: Vec<RouteStep>,
    is_primary: bool,
}

impl RouteCandidate {
    pub(crate) fn from_raw(raw: RawRoute, is_primary: bool) -> Self {
        let RawRoute {
            distance_meters,
            duration_seconds,
            geometry,
            steps,
        } = raw;
        Self {
            geometry,
            distance_meters,
            duration_seconds,
            distance_miles: meters_to_miles(distance_meters),
            duration_minutes: seconds_to_minutes(duration_seconds),
            steps,
            is_primary,
        }
    }

    /// Path shape from start to end.
    #[must_use]
    pub fn geometry(&self) -> &[Coordinate] {
        &self.geometry
    }

    /// Route length in metres, unrounded.
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Expected travel time in seconds, unrounded.
    #[must_use]
    pub const fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Route length in miles, one decimal.
    #[must_use]
    pub const fn distance_miles(&self) -> f64 {
        self.distance_miles
    }

    /// Travel time in minutes, one decimal.
    #[must_use]
    pub const fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    /// Maneuvers in travel order.
    #[must_use]
    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    /// Whether this is the recommended candidate of its result set.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Numbered display instructions for this route.
    #[must_use]
    pub fn instructions(&self) -> Vec<InstructionStep> {
        self.steps
            .iter()
            .enumerate()
            .map(|(offset, step)| InstructionStep {
                index: offset + 1,
                instruction: step.instruction.clone(),
                distance_miles: meters_to_miles(step.distance_meters),
                duration_minutes: seconds_to_minutes(step.duration_seconds),
            })
            .collect()
    }

    /// Whether any geometry point falls inside one of `zones`.
    #[must_use]
    pub fn enters_any(&self, zones: &[DangerZone]) -> bool {
        route_enters_danger_zone(&self.geometry, zones)
    }
}
