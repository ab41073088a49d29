//! WGS84 positions used for route endpoints and geometry.

use std::fmt;
use std::str::FromStr;

use geo::{Coord, Point};
use thiserror::Error;

/// A longitude/latitude pair in decimal degrees.
///
/// Longitude lies in `[-180, 180]` and latitude in `[-90, 90]`. The value is
/// immutable once constructed.
///
/// # Examples
/// ```
/// use evacroute_core::Coordinate;
///
/// # fn main() -> Result<(), evacroute_core::CoordinateError> {
/// let shelter = Coordinate::new(-122.4194, 37.7749)?;
/// assert_eq!(shelter.lon(), -122.4194);
/// assert_eq!(shelter.to_string(), "-122.4194,37.7749");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

/// Errors returned by [`Coordinate::new`] and [`Coordinate::from_str`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// One of the components was NaN or infinite.
    #[error("coordinate components must be finite")]
    NonFinite,
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Text input was not of the form `lon,lat`.
    #[error("expected `lon,lat`, got {0:?}")]
    Malformed(String),
}

impl Coordinate {
    /// Validate and construct a coordinate.
    pub fn new(lon: f64, lat: f64) -> Result<Self, CoordinateError> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange(lon));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        Ok(Self { lon, lat })
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lon, self.lat)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordinateError::Malformed(s.to_owned());
        let (lon, lat) = s.split_once(',').ok_or_else(malformed)?;
        let lon = lon.trim().parse::<f64>().map_err(|_| malformed())?;
        let lat = lat.trim().parse::<f64>().map_err(|_| malformed())?;
        Self::new(lon, lat)
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = CoordinateError;

    fn try_from([lon, lat]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(lon, lat)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.lon, value.lat]
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.lon,
            y: value.lat,
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Self::new(value.lon, value.lat)
    }
}
