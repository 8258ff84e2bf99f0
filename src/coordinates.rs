use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("Latitude and longitude must be valid numbers.")]
    NotANumber { value: String },
}

/// A latitude/longitude pair in decimal degrees.
///
/// Values are not range-checked; whatever parses as a number is passed on to
/// the sun times provider unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, CoordinateError> {
        Ok(Self::new(parse_degrees(latitude)?, parse_degrees(longitude)?))
    }

    /// Whether both values lie within [-90, 90] and [-180, 180].
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

fn parse_degrees(value: &str) -> Result<f64, CoordinateError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| CoordinateError::NotANumber {
            value: value.to_string(),
        })
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
